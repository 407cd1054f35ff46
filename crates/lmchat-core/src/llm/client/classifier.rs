//! Outcome classification
//!
//! Every attempt outcome maps deterministically onto a [`ChatResult`]:
//!
//! 1. transport timeout → `timeout` (504)
//! 2. transport connection failure → `connection_error` (503)
//! 3. non-2xx reply → `http_error` (502)
//! 4. 2xx with blank content, failing on empty → `empty_response` (502)
//! 5. 2xx with blank content, not failing on empty → synthesized success text
//! 6. anything else → `unhandled_exception` (500), or `connection_error` when
//!    the description names a connectivity problem

use super::transport::{HttpReply, TransportError, describes_connection_problem};
use crate::config::ClientOptions;
use crate::llm::parsers::{PathSegment, ResponseParser, extract_error_detail};
use crate::llm::providers::error_utils::{sanitize_error_text, truncate_error_text};
use crate::llm::providers::{ProviderAdapter, ProviderInstance};
use crate::llm::result::{ChatFailure, ChatResult, FailureCode};

/// Classify the final outcome of the retry engine
pub fn classify_outcome(
    adapter: &ProviderInstance,
    outcome: Result<HttpReply, TransportError>,
    options: &ClientOptions,
) -> ChatResult {
    match outcome {
        Ok(reply) => adapter.parse_response(&reply.body, reply.status, options),
        Err(error) => classify_transport_error(adapter.name(), &error).into(),
    }
}

/// Classify a failure that produced no HTTP reply
pub fn classify_transport_error(provider: &str, error: &TransportError) -> ChatFailure {
    match error {
        TransportError::Timeout(timeout) => ChatFailure::timeout(format!(
            "Request to the {} LLM service timed out after {}s",
            provider,
            timeout.as_secs_f64()
        )),
        TransportError::Connect(description) => ChatFailure::connection_error(format!(
            "Cannot reach the {} LLM service: {}",
            provider,
            truncate_error_text(description)
        )),
        TransportError::Other(description) => classify_unexpected(provider, description),
    }
}

/// Fallback for failures outside the known classes.
///
/// Descriptions that textually indicate a connectivity problem are
/// reclassified as `connection_error`.
pub fn classify_unexpected(provider: &str, description: &str) -> ChatFailure {
    let description = truncate_error_text(description.trim());
    if describes_connection_problem(&description) {
        ChatFailure::connection_error(format!(
            "Cannot reach the {} LLM service: {}",
            provider, description
        ))
    } else {
        ChatFailure::unhandled(format!(
            "Unexpected error calling the {} LLM service: {}",
            provider, description
        ))
    }
}

/// Classify a received HTTP reply
pub fn classify_reply(
    provider: &str,
    http_status: u16,
    raw_body: &str,
    content_paths: &[&[PathSegment]],
    fail_on_empty_content: bool,
) -> ChatResult {
    let parsed = ResponseParser::parse_body(raw_body);

    if !(200..300).contains(&http_status) {
        let detail = extract_error_detail(&parsed, raw_body);
        return ChatFailure::new(
            FailureCode::HttpError,
            format!(
                "The {} LLM service returned HTTP {}: {}",
                provider, http_status, detail
            ),
            Some(raw_body),
        )
        .into();
    }

    if let Some(text) = ResponseParser::extract_content(&parsed, content_paths) {
        return ChatResult::success(text);
    }

    let finish_reason = ResponseParser::finish_reason(&parsed);

    if fail_on_empty_content {
        let reason = finish_reason
            .map(|r| format!(" (finish_reason: {})", r))
            .unwrap_or_default();
        let body = raw_body.trim();
        let body = if body.is_empty() {
            "(empty body)".to_string()
        } else {
            sanitize_error_text(body)
        };
        return ChatFailure::new(
            FailureCode::EmptyResponse,
            format!(
                "The {} LLM service returned no content{}: {}",
                provider, reason, body
            ),
            Some(raw_body),
        )
        .into();
    }

    match finish_reason {
        Some(reason) => {
            ChatResult::success(format!("(The model returned no content; finish_reason: {})", reason))
        }
        None => ChatResult::success("(The model returned no content)"),
    }
}
