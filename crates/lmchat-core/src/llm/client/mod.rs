//! Generic LLM client
//!
//! Composes the provider adapters, the retry engine and the outcome
//! classifier behind a single call that always yields a [`ChatResult`](crate::llm::ChatResult).

mod chat;
pub mod classifier;
mod constructor;
mod retry;
pub mod transport;
mod types;

pub use retry::backoff_delay;
pub use transport::{HttpReply, HttpRequest, HttpTransport, Transport, TransportError, shared_http_client};
pub use types::LlmClient;
