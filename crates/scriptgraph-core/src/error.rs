use thiserror::Error;

/// Core error type for script graph data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A short id string that is not four dash-separated hex bytes
    #[error("Invalid short id: {0}")]
    InvalidShortId(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}
