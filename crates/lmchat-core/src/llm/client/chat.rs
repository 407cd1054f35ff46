//! Chat completion orchestration

use super::classifier::classify_outcome;
use super::types::LlmClient;
use crate::config::ClientOptions;
use crate::llm::providers::{ProviderAdapter, ProviderInstance};
use crate::llm::request::ChatRequest;
use crate::llm::result::{ChatFailure, ChatResult};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

impl LlmClient {
    /// Send a chat completion request.
    ///
    /// Validates the options and request, dispatches through the adapter
    /// selected by `options.provider()`, retries transient transport failures
    /// and classifies the outcome. The whole call is bounded by
    /// [`ClientOptions::worst_case_latency`].
    ///
    /// Never fails: every error path ends in [`ChatResult::Failure`].
    #[instrument(skip(self, request, options), fields(provider = %options.provider(), model = %options.model()))]
    pub async fn generate_chat(&self, request: &ChatRequest, options: &ClientOptions) -> ChatResult {
        self.generate_chat_with_deadline(request, options, options.worst_case_latency())
            .await
    }

    /// Send a chat completion request under a caller deadline.
    ///
    /// When `deadline` expires while an attempt or a retry pause is
    /// outstanding, the in-flight work is dropped and the result is a
    /// `timeout` failure.
    pub async fn generate_chat_with_deadline(
        &self,
        request: &ChatRequest,
        options: &ClientOptions,
        deadline: Duration,
    ) -> ChatResult {
        if let Err(error) = options.validate().and_then(|()| request.validate()) {
            warn!(error = %error, "rejected before dispatch");
            return ChatFailure::from(error).into();
        }

        let adapter = ProviderInstance::for_kind(options.provider());
        let http_request = adapter.build_http_request(request, options);
        debug!(
            url = %http_request.url,
            body = %http_request.body,
            "dispatching chat completion"
        );

        let outcome = match timeout(
            deadline,
            self.send_with_retry(adapter.name(), &http_request, options.max_retries()),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(deadline_secs = deadline.as_secs_f64(), "caller deadline exceeded");
                return ChatFailure::timeout(format!(
                    "Request to the {} LLM service exceeded the {}s deadline",
                    adapter.name(),
                    deadline.as_secs_f64()
                ))
                .into();
            }
        };

        let result = classify_outcome(&adapter, outcome, options);
        match &result {
            ChatResult::Success { text } => {
                info!(chars = text.chars().count(), "chat completion succeeded")
            }
            ChatResult::Failure(failure) => warn!(
                code = %failure.code,
                status = failure.http_status,
                message = %failure.message,
                "chat completion failed"
            ),
        }
        result
    }
}
