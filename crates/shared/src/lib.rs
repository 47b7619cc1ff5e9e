pub mod domain;
pub mod error;
pub mod routes;

pub use domain::{ImageRef, User};
pub use error::RouteError;
pub use routes::Route;
