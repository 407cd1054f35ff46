//! # lmchat-core
//!
//! Chat-completions client for OpenAI-compatible servers (LM Studio, vLLM,
//! llama.cpp, ...) and Azure OpenAI.
//!
//! The entry point for hosts is [`ask`], which checks configuration and input
//! and then delegates to [`LlmClient::generate_chat`]. Every outcome is either
//! generated text or a [`ChatFailure`] carrying an HTTP-like status:
//!
//! | Code | Status |
//! |---|---|
//! | `invalid_input` | 400 |
//! | `invalid_configuration` | 500 |
//! | `timeout` | 504 |
//! | `connection_error` | 503 |
//! | `http_error` | 502 |
//! | `empty_response` | 502 |
//! | `unhandled_exception` | 500 |
//!
//! ```no_run
//! use lmchat_core::{ask, ChatConfig, LlmClient};
//!
//! # async fn run() -> lmchat_core::LmResult<()> {
//! let config = ChatConfig {
//!     base_url: Some("http://localhost:1234/v1".to_string()),
//!     ..Default::default()
//! };
//! let client = LlmClient::new()?;
//! let reply = ask(&client, &config, "What is Rust?").await;
//! println!("{} {}", reply.status, reply.message);
//! # Ok(())
//! # }
//! ```

pub mod ask;
pub mod config;
pub mod error;
pub mod llm;

#[cfg(test)]
mod test_support;

pub use ask::{AskReply, ask};
pub use config::{ChatConfig, ClientOptions, load_config};
pub use error::{LmChatError, LmResult};
pub use llm::{
    ChatFailure, ChatMessage, ChatRequest, ChatResult, FailureCode, LlmClient, MessageRole,
    ProviderKind,
};
