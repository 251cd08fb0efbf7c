//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<image::ImageError> for DomainError {
    fn from(e: image::ImageError) -> Self {
        Self::Render(e.to_string())
    }
}
