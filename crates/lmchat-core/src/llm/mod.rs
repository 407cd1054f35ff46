//! LLM client, adapters and message types

pub mod client;
pub mod messages;
pub mod parsers;
pub mod provider_types;
pub mod providers;
pub mod request;
pub mod result;

pub use client::LlmClient;
pub use messages::{ChatMessage, MessageRole};
pub use provider_types::ProviderKind;
pub use request::ChatRequest;
pub use result::{ChatFailure, ChatResult, FailureCode};
