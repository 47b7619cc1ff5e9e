//! Presentation-independent core of the user directory demo: name generation,
//! navigation state and the per-screen models the front ends render.

pub mod details_screen;
pub mod error;
pub mod generator;
pub mod list_screen;
pub mod navigation;
pub mod settings;
pub mod vocabulary;

pub use details_screen::DetailsScreen;
pub use error::SettingsError;
pub use generator::{capitalize, NameFaker, UserGenerator};
pub use list_screen::{LazyListWindow, ListScreen};
pub use navigation::{EntryId, Navigator, RouteEntry};
pub use settings::{load_settings, Settings};

/// Number of users the list screen asks for on first display.
pub const DEFAULT_USER_COUNT: usize = 100;
