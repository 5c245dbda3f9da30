use thiserror::Error;
use uuid::Uuid;

/// Error type shared by the roster, history, storage, and configuration layers.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error(
        "Partner shares cannot exceed 100% ({allocated:.2}% already allocated, {requested:.2}% requested)"
    )]
    ShareLimitExceeded { allocated: f64, requested: f64 },
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookError>;

impl BookError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        BookError::Validation(message.into())
    }

    pub(crate) fn not_found(kind: &'static str, id: Uuid) -> Self {
        BookError::NotFound { kind, id }
    }
}

impl From<std::io::Error> for BookError {
    fn from(err: std::io::Error) -> Self {
        BookError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        BookError::Storage(err.to_string())
    }
}
