//! Error types for wildatlas app services

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Auth failures carry the provider's (or validator's) own wording
    #[error("{0}")]
    Auth(String),
}

/// Result type alias for wildatlas app services
pub type Result<T> = std::result::Result<T, AppError>;
