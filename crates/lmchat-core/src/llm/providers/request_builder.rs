//! Shared request body builder for OpenAI-style chat-completions payloads

use crate::llm::request::ChatRequest;
use serde_json::{Value, json};

/// Build a non-streaming chat-completions body.
///
/// Fields: `model` (optional, Azure routes on the deployment instead),
/// `messages` as `{role, content}` in order, `temperature`, `max_tokens`,
/// and `stream: false`.
pub fn build_openai_request_body(model: &str, request: &ChatRequest, include_model: bool) -> Value {
    let mut body = json!({
        "messages": request.messages(),
        "temperature": request.temperature(),
        "max_tokens": request.max_tokens(),
        "stream": false,
    });

    if include_model {
        body["model"] = json!(model);
    }

    body
}
