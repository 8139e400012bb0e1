use std::fmt::{self, Display};

/// Errors produced by model constructors and decode helpers.
#[derive(Debug)]
pub enum ModelError {
    Json(serde_json::Error),
    InvalidListing(String),
    InvalidPlacement(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Json(err) => write!(f, "json error: {err}"),
            ModelError::InvalidListing(msg) => write!(f, "invalid listing: {msg}"),
            ModelError::InvalidPlacement(msg) => write!(f, "invalid placement: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Json(err) => Some(err),
            ModelError::InvalidListing(_) | ModelError::InvalidPlacement(_) => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
