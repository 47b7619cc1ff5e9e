use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route registered for path '{path}'")]
    UnknownRoute { path: String },
}

impl RouteError {
    pub fn unknown(path: impl Into<String>) -> Self {
        Self::UnknownRoute { path: path.into() }
    }
}
