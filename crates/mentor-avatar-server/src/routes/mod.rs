//! Mentor Avatar Routes
//!
//! - / - Input form
//! - /generate - Render avatars from the form
//! - /download/:filename - Stored PNGs (inline or attachment)
//! - /api/analyze - Trait analysis only (JSON)

pub mod analyze;
pub mod download;
pub mod form;
pub mod generate;
pub mod swagger;

use axum::http::StatusCode;

use mentor_avatar::DomainError;

/// Map a domain error onto an HTTP status and message
pub fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Render(_) | DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}
