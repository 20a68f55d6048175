use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The question-generation service could not be reached or answered with a non-2xx status.
    #[error("Remote call failed: {0}")]
    Remote(String),

    /// The remote response arrived but its content could not be turned into questions.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Represents data validation errors (e.g., blank prompt, no answers).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., missing environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// An event was fed to the wizard in a state that does not accept it.
    #[error("Invalid transition: {event} is not accepted in state {state}")]
    InvalidTransition { state: &'static str, event: &'static str },

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Remote(s) => AppError::Remote(s.clone()),
            AppError::Parse(s) => AppError::Parse(s.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::InvalidTransition { state, event } => AppError::InvalidTransition {
                state: *state,
                event: *event,
            },
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Remote(format!("HTTP error: {}", err))
    }
}
