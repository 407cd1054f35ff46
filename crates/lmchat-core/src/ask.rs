//! The inbound `ask` operation
//!
//! Forwards one user message to the configured LLM server and answers with a
//! status the calling boundary can pass straight through.

use crate::config::ChatConfig;
use crate::error::LmChatError;
use crate::llm::client::LlmClient;
use crate::llm::result::{ChatFailure, ChatResult, FailureCode};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Reply rendered by a calling boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskReply {
    /// 200 on success, otherwise the failure's HTTP-like status
    pub status: u16,
    /// Generated text, or the failure message
    pub message: String,
    /// Failure class; absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<FailureCode>,
}

impl AskReply {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Whether trying again later may succeed (503/504)
    pub fn is_retryable(&self) -> bool {
        self.code.is_some_and(|code| code.is_retryable())
    }
}

impl From<ChatResult> for AskReply {
    fn from(result: ChatResult) -> Self {
        match result {
            ChatResult::Success { text } => AskReply {
                status: 200,
                message: text,
                code: None,
            },
            ChatResult::Failure(failure) => failure.into(),
        }
    }
}

impl From<ChatFailure> for AskReply {
    fn from(failure: ChatFailure) -> Self {
        AskReply {
            status: failure.http_status,
            message: failure.message,
            code: Some(failure.code),
        }
    }
}

/// Ask the configured model one question.
///
/// Configuration is checked before the message: a missing base URL yields 500
/// even when the message is also blank. Neither check touches the network.
#[instrument(skip(client, config, message), fields(provider = %config.provider, model = %config.model))]
pub async fn ask(client: &LlmClient, config: &ChatConfig, message: &str) -> AskReply {
    if !config.has_base_url() {
        warn!("base URL is not configured");
        return ChatFailure::from(LmChatError::config("the base URL is not set")).into();
    }

    if message.trim().is_empty() {
        return ChatFailure::invalid_input("A message is required").into();
    }

    let request = config.build_request(message);
    let options = config.client_options();
    client.generate_chat(&request, &options).await.into()
}
