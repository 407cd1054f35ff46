//! Core error type for lmchat

use thiserror::Error;

/// Result type alias for lmchat operations
pub type LmResult<T> = Result<T, LmChatError>;

/// Main error type for lmchat
#[derive(Error, Debug, Clone)]
pub enum LmChatError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// HTTP client construction errors
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl LmChatError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "LMCHAT_CONFIG",
            Self::InvalidInput { .. } => "LMCHAT_INVALID_INPUT",
            Self::Http { .. } => "LMCHAT_HTTP",
            Self::Io { .. } => "LMCHAT_IO",
        }
    }

    /// Get the human-readable error message
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Http { message }
            | Self::Io { message, .. } => message,
        }
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::InvalidInput { field, .. } => field.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            Self::Http { .. } => None,
        }
    }
}
