use serde::{Deserialize, Serialize};

/// Static image assets bundled with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    /// Round avatar used for every user row and the details illustration.
    #[default]
    Placeholder,
}

impl ImageRef {
    /// File stem of the asset as shipped next to the binary.
    pub fn asset_name(self) -> &'static str {
        match self {
            ImageRef::Placeholder => "android_circle",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.asset_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub image: ImageRef,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: ImageRef::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageRef, User};

    #[test]
    fn new_user_points_at_placeholder_image() {
        let user = User::new("OtterTeal");
        assert_eq!(user.name, "OtterTeal");
        assert_eq!(user.image, ImageRef::Placeholder);
        assert_eq!(user.image.file_name(), "android_circle.png");
    }

    #[test]
    fn serializes_image_ref_as_snake_case() {
        let json = serde_json::to_string(&User::new("LynxRed")).expect("serialize");
        assert_eq!(json, r#"{"name":"LynxRed","image":"placeholder"}"#);
    }
}
