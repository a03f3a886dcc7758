//! Application error types.
//!
//! Mapping errors onto HTTP responses belongs to the edge service; this
//! crate only distinguishes the cases the edge needs to tell apart.

use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
