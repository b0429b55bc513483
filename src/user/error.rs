//! User domain errors.

use thiserror::Error;

/// Errors produced by user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// No record matches the requested id.
    #[error("User not found")]
    NotFound,

    /// The request payload failed validation.
    #[error("{0}")]
    Validation(String),
}

impl UserError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
