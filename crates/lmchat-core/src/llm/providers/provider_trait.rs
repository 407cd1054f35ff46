//! Provider adapter trait and unified enum

use crate::config::ClientOptions;
use crate::llm::client::classifier::classify_reply;
use crate::llm::client::transport::HttpRequest;
use crate::llm::parsers::{CONTENT_PATHS, PathSegment};
use crate::llm::provider_types::ProviderKind;
use crate::llm::request::ChatRequest;
use crate::llm::result::ChatResult;
use serde_json::Value;

/// Translation between the generic request/result and one wire protocol.
///
/// Adding a provider means adding an implementation and a
/// [`ProviderInstance`] variant; retry and classification are shared.
pub trait ProviderAdapter: Send + Sync {
    /// Provider name used in logs and messages
    fn name(&self) -> &'static str;

    /// Full chat-completions URL
    fn build_endpoint(&self, options: &ClientOptions) -> String;

    /// Wire-format request body
    fn build_payload(&self, request: &ChatRequest, options: &ClientOptions) -> Value;

    /// Authentication headers; empty when no key is configured
    fn auth_headers(&self, options: &ClientOptions) -> Vec<(&'static str, String)>;

    /// Candidate paths for the generated text
    fn content_paths(&self) -> &'static [&'static [PathSegment]] {
        CONTENT_PATHS
    }

    /// Classify a received HTTP reply
    fn parse_response(&self, raw_body: &str, http_status: u16, options: &ClientOptions) -> ChatResult {
        classify_reply(
            self.name(),
            http_status,
            raw_body,
            self.content_paths(),
            options.fail_on_empty_content(),
        )
    }

    /// Assemble the transport-level request
    fn build_http_request(&self, request: &ChatRequest, options: &ClientOptions) -> HttpRequest {
        let mut headers = vec![
            ("Accept", "application/json".to_string()),
            ("Content-Type", "application/json".to_string()),
        ];
        headers.extend(self.auth_headers(options));

        HttpRequest {
            url: self.build_endpoint(options),
            headers,
            body: self.build_payload(request, options),
            timeout: options.timeout(),
        }
    }
}

/// Closed set of supported adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderInstance {
    OpenAiCompatible(super::OpenAiCompatibleAdapter),
    Azure(super::AzureAdapter),
}

impl ProviderInstance {
    /// Select the adapter for a provider kind
    pub fn for_kind(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::OpenAiCompatible => Self::OpenAiCompatible(super::OpenAiCompatibleAdapter),
            ProviderKind::Azure => Self::Azure(super::AzureAdapter),
        }
    }
}

impl ProviderAdapter for ProviderInstance {
    fn name(&self) -> &'static str {
        match self {
            Self::OpenAiCompatible(p) => p.name(),
            Self::Azure(p) => p.name(),
        }
    }

    fn build_endpoint(&self, options: &ClientOptions) -> String {
        match self {
            Self::OpenAiCompatible(p) => p.build_endpoint(options),
            Self::Azure(p) => p.build_endpoint(options),
        }
    }

    fn build_payload(&self, request: &ChatRequest, options: &ClientOptions) -> Value {
        match self {
            Self::OpenAiCompatible(p) => p.build_payload(request, options),
            Self::Azure(p) => p.build_payload(request, options),
        }
    }

    fn auth_headers(&self, options: &ClientOptions) -> Vec<(&'static str, String)> {
        match self {
            Self::OpenAiCompatible(p) => p.auth_headers(options),
            Self::Azure(p) => p.auth_headers(options),
        }
    }

    fn content_paths(&self) -> &'static [&'static [PathSegment]] {
        match self {
            Self::OpenAiCompatible(p) => p.content_paths(),
            Self::Azure(p) => p.content_paths(),
        }
    }
}
