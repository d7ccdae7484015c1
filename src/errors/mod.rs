//! Error handling module for the users admin core.
//!
//! Provides the error taxonomy shared by the store client and the view model, plus the
//! fixed user-facing messages the view model stores in its `error` slot.

use serde::Serialize;

use crate::validation::FieldErrors;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Fixed, operation-specific messages shown to the user after a transport failure.
pub mod messages {
    pub const LOAD_FAILED: &str = "Failed to load users. Check that the REST server is running.";
    pub const SAVE_FAILED: &str = "Failed to save user.";
    pub const DELETE_FAILED: &str = "Failed to delete user.";
}

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Draft failed field validation; never reaches the network
    Validation(FieldErrors),
    /// Network failure, timeout, non-2xx status or undecodable body
    Transport(String),
    /// Invalid startup configuration
    Config(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Transport(_) => codes::TRANSPORT_ERROR,
            AppError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors
                .iter()
                .map(|(field, msg)| format!("{}: {}", field, msg))
                .collect::<Vec<_>>()
                .join("; "),
            AppError::Transport(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
        }
    }

    /// Field errors carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_timeout() {
            AppError::Transport(format!("Request timed out: {}", err))
        } else {
            AppError::Transport(format!("HTTP error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Transport(format!("JSON error: {}", err))
    }
}

/// Serializable error details, suitable for handing to a presentation layer.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl From<&AppError> for ErrorDetails {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.message(),
            fields: error.field_errors().cloned(),
        }
    }
}
