//! Azure OpenAI adapter

use super::provider_trait::ProviderAdapter;
use super::request_builder::build_openai_request_body;
use crate::config::{ClientOptions, defaults};
use crate::llm::request::ChatRequest;
use serde_json::Value;

/// Azure OpenAI chat-completions adapter.
///
/// Requests are routed by deployment id (`ClientOptions::model`) and carry an
/// `api-version` query parameter; authentication uses the `api-key` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AzureAdapter;

impl ProviderAdapter for AzureAdapter {
    fn name(&self) -> &'static str {
        "azure"
    }

    fn build_endpoint(&self, options: &ClientOptions) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            options.base_url(),
            urlencoding::encode(options.model()),
            urlencoding::encode(options.api_version().unwrap_or(defaults::AZURE_API_VERSION))
        )
    }

    fn build_payload(&self, request: &ChatRequest, options: &ClientOptions) -> Value {
        build_openai_request_body(options.model(), request, false)
    }

    fn auth_headers(&self, options: &ClientOptions) -> Vec<(&'static str, String)> {
        options
            .api_key()
            .map(|key| vec![("api-key", key.to_string())])
            .unwrap_or_default()
    }
}
