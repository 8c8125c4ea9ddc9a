//! Error types for the application entry point.

use thiserror::Error;

/// Message carried by [`AppError::Unimplemented`].
pub const UNIMPLEMENTED_MESSAGE: &str =
    "The graph workflow entry point has not been implemented yet.";

/// Errors that can occur while starting or running the application.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// The requested feature does not exist yet.
    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    /// The runtime configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("Tracing setup error: {0}")]
    Tracing(String),
}

impl AppError {
    /// The canonical error returned by the entry point.
    pub fn unimplemented() -> Self {
        AppError::Unimplemented(UNIMPLEMENTED_MESSAGE.to_string())
    }

    pub fn is_unimplemented(&self) -> bool {
        matches!(self, AppError::Unimplemented(_))
    }

    /// Process exit status for this error. Every failure is abnormal termination.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Unimplemented(_) | AppError::Config(_) | AppError::Tracing(_) => 1,
        }
    }
}
