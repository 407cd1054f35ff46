//! Uniform outcome of a chat completion call

use crate::llm::providers::error_utils::{sanitize_error_body, truncate_error_text};
use serde::{Deserialize, Serialize};

/// Failure classes, distinguishable by the HTTP-like status they carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    /// Blank user message (400)
    InvalidInput,
    /// Missing or unusable configuration (500)
    InvalidConfiguration,
    /// Attempt or caller deadline exceeded (504)
    Timeout,
    /// Upstream unreachable: refused, DNS failure, unreachable (503)
    ConnectionError,
    /// Upstream answered with a non-2xx status (502)
    HttpError,
    /// Upstream answered 2xx without usable content (502)
    EmptyResponse,
    /// Anything not otherwise classified (500)
    UnhandledException,
}

impl FailureCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::InvalidInput => "invalid_input",
            FailureCode::InvalidConfiguration => "invalid_configuration",
            FailureCode::Timeout => "timeout",
            FailureCode::ConnectionError => "connection_error",
            FailureCode::HttpError => "http_error",
            FailureCode::EmptyResponse => "empty_response",
            FailureCode::UnhandledException => "unhandled_exception",
        }
    }

    /// Status reported to callers for this class.
    ///
    /// Provider HTTP errors are normalized to 502 rather than passed through;
    /// the provider's own status is kept in the failure message.
    pub fn http_status(&self) -> u16 {
        match self {
            FailureCode::InvalidInput => 400,
            FailureCode::InvalidConfiguration => 500,
            FailureCode::Timeout => 504,
            FailureCode::ConnectionError => 503,
            FailureCode::HttpError => 502,
            FailureCode::EmptyResponse => 502,
            FailureCode::UnhandledException => 500,
        }
    }

    /// Whether a caller may reasonably retry later (503/504)
    pub fn is_retryable(&self) -> bool {
        matches!(self, FailureCode::Timeout | FailureCode::ConnectionError)
    }
}

impl std::fmt::Display for FailureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFailure {
    pub code: FailureCode,
    pub http_status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
}

impl ChatFailure {
    /// Build a failure; the message is truncated and the raw body sanitized.
    pub fn new(code: FailureCode, message: impl AsRef<str>, raw_body: Option<&str>) -> Self {
        let message = truncate_error_text(message.as_ref().trim());
        Self {
            code,
            http_status: code.http_status(),
            message: if message.is_empty() {
                code.as_str().to_string()
            } else {
                message
            },
            raw_body: raw_body.and_then(sanitize_error_body),
        }
    }

    pub fn invalid_input(message: impl AsRef<str>) -> Self {
        Self::new(FailureCode::InvalidInput, message, None)
    }

    pub fn invalid_configuration(message: impl AsRef<str>) -> Self {
        Self::new(FailureCode::InvalidConfiguration, message, None)
    }

    pub fn timeout(message: impl AsRef<str>) -> Self {
        Self::new(FailureCode::Timeout, message, None)
    }

    pub fn connection_error(message: impl AsRef<str>) -> Self {
        Self::new(FailureCode::ConnectionError, message, None)
    }

    pub fn unhandled(message: impl AsRef<str>) -> Self {
        Self::new(FailureCode::UnhandledException, message, None)
    }
}

impl std::fmt::Display for ChatFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.http_status, self.message)
    }
}

/// Result of `LlmClient::generate_chat`: generated text or a classified failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatResult {
    Success { text: String },
    Failure(ChatFailure),
}

impl ChatResult {
    pub fn success(text: impl Into<String>) -> Self {
        ChatResult::Success { text: text.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChatResult::Success { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ChatResult::Success { text } => Some(text),
            ChatResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ChatFailure> {
        match self {
            ChatResult::Success { .. } => None,
            ChatResult::Failure(failure) => Some(failure),
        }
    }

    /// Status a calling boundary should report (200 on success)
    pub fn http_status(&self) -> u16 {
        match self {
            ChatResult::Success { .. } => 200,
            ChatResult::Failure(failure) => failure.http_status,
        }
    }
}

impl From<ChatFailure> for ChatResult {
    fn from(failure: ChatFailure) -> Self {
        ChatResult::Failure(failure)
    }
}
