//! Error types for lmchat
//!
//! `LmChatError` covers the fallible steps that sit outside the chat client's
//! own result taxonomy: configuration loading, request assembly and I/O.
//! At the client boundary these are folded into a `ChatFailure` with the
//! `unhandled_exception` code, so they never escape `LlmClient::generate_chat`.

mod constructors;
mod conversions;
mod types;

pub use types::{LmChatError, LmResult};
