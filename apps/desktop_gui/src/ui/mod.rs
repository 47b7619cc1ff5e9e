//! UI layer for the desktop GUI: app shell, the two screens, theme, and layout helpers.

pub mod app;
pub mod details;
pub mod layout;
pub mod list;
pub mod theme;

pub use app::DemoApp;
