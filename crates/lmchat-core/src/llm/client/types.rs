//! LLM client type definitions

use super::transport::Transport;
use std::sync::Arc;

/// Client for OpenAI-compatible and Azure chat-completions servers.
///
/// Holds no per-call state: options and requests are passed to every call,
/// so one client can serve many concurrent requests. The only shared
/// resource is the injected [`Transport`] (by default the process-wide
/// pooled HTTP client).
///
/// # Examples
///
/// ```no_run
/// use lmchat_core::config::ClientOptions;
/// use lmchat_core::llm::{ChatRequest, LlmClient, ProviderKind};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LlmClient::new()?;
/// let options = ClientOptions::new(ProviderKind::OpenAiCompatible, "http://localhost:1234/v1");
/// let request = ChatRequest::from_prompt("You are a helpful assistant.", "What is Rust?");
///
/// let result = client.generate_chat(&request, &options).await;
/// match result.text() {
///     Some(text) => println!("{}", text),
///     None => eprintln!("{:?}", result.failure()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LlmClient {
    pub(super) transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient").finish_non_exhaustive()
    }
}
