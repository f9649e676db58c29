//! Submission error types
//!
//! A submission fails in exactly one of two ways: the input is rejected
//! locally before any request is made, or the dispatched request does not
//! complete successfully. Both carry a human-readable message that the
//! model stores for display.

use thiserror::Error;

/// Error raised by a submission attempt
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Input failed local validation; no request was dispatched
    #[error("{0}")]
    Validation(String),
    /// The request was dispatched but failed in transport or returned a
    /// non-success status
    #[error("{0}")]
    Request(String),
}

impl SubmitError {
    /// Create a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a request error with the given message
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// Check if this error was detected before dispatch
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error was detected after dispatch
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}
