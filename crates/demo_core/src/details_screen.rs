use shared::domain::ImageRef;

pub const DETAILS_TITLE: &str = "Details";
pub const WORKSHOP_CONTEXT: &str = "Flutter workshop at the Droidcon Lisbon";
pub const ILLUSTRATION_HEIGHT: f32 = 250.0;
pub const CONTENT_PADDING: f32 = 16.0;
pub const DESCRIPTION_FONT_SIZE: f32 = 16.0;

/// Model of the details screen for a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsScreen {
    user_name: String,
}

impl DetailsScreen {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }

    /// Builds the screen from a route argument, substituting an empty name
    /// when the argument is absent.
    pub fn from_route_param(user_name: Option<&str>) -> Self {
        if user_name.is_none() {
            tracing::debug!("details opened without a name argument");
        }
        Self::new(user_name.unwrap_or_default())
    }

    pub fn title(&self) -> &'static str {
        DETAILS_TITLE
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn image(&self) -> ImageRef {
        ImageRef::Placeholder
    }

    pub fn description(&self) -> String {
        format!(
            "{} details.The screen is prepared for a {WORKSHOP_CONTEXT}.",
            self.user_name
        )
    }
}

#[cfg(test)]
#[path = "tests/details_screen_tests.rs"]
mod tests;
