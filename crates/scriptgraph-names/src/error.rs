use thiserror::Error;

/// Errors from name table encoding, storage and configuration
#[derive(Error, Debug)]
pub enum NamesError {
    /// Underlying file or stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table ended before the declared number of entries
    #[error("Name table truncated: {0}")]
    Truncated(String),

    /// A name that is not valid UTF-8
    #[error("Invalid UTF-8 in name table: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for NamesError {
    fn from(err: serde_yaml::Error) -> Self {
        NamesError::Config(err.to_string())
    }
}

/// Result alias for name overlay operations
pub type NamesResult<T> = Result<T, NamesError>;
