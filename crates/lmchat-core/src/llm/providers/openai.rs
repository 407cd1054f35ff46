//! OpenAI-compatible adapter (LM Studio, llama.cpp server, vLLM, OpenAI)

use super::provider_trait::ProviderAdapter;
use super::request_builder::build_openai_request_body;
use crate::config::ClientOptions;
use crate::llm::request::ChatRequest;
use serde_json::Value;

/// OpenAI-compatible chat-completions adapter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenAiCompatibleAdapter;

impl ProviderAdapter for OpenAiCompatibleAdapter {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    fn build_endpoint(&self, options: &ClientOptions) -> String {
        format!("{}/chat/completions", options.base_url())
    }

    fn build_payload(&self, request: &ChatRequest, options: &ClientOptions) -> Value {
        build_openai_request_body(options.model(), request, true)
    }

    // Local servers commonly run without a key; send Bearer auth only when set.
    fn auth_headers(&self, options: &ClientOptions) -> Vec<(&'static str, String)> {
        options
            .api_key()
            .map(|key| vec![("Authorization", format!("Bearer {}", key))])
            .unwrap_or_default()
    }
}
