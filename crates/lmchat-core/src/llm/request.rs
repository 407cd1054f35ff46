//! Per-call chat request

use crate::config::defaults;
use crate::error::{LmChatError, LmResult};
use crate::llm::messages::{ChatMessage, MessageRole};

/// Messages plus sampling parameters for a single completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

impl ChatRequest {
    /// Create a request with default temperature and token budget
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: defaults::TEMPERATURE,
            max_tokens: defaults::MAX_TOKENS,
        }
    }

    /// System prompt followed by a single user turn.
    ///
    /// A blank system prompt is omitted.
    pub fn from_prompt(system_prompt: &str, user_message: &str) -> Self {
        let mut messages = Vec::with_capacity(2);
        if !system_prompt.trim().is_empty() {
            messages.push(ChatMessage::system(system_prompt));
        }
        messages.push(ChatMessage::user(user_message));
        Self::new(messages)
    }

    /// Set temperature (passed through unchanged)
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set max tokens; zero keeps the default
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        if max_tokens > 0 {
            self.max_tokens = max_tokens;
        }
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Check the request is dispatchable: at least one message, and the
    /// non-system turns are not all blank.
    pub fn validate(&self) -> LmResult<()> {
        if self.messages.is_empty() {
            return Err(LmChatError::invalid_input_field(
                "Chat request contains no messages",
                "messages",
            ));
        }
        let has_content = self
            .messages
            .iter()
            .filter(|m| m.role() != MessageRole::System)
            .any(|m| !m.is_blank());
        if !has_content {
            return Err(LmChatError::invalid_input_field(
                "Chat request contains no user or assistant content",
                "messages",
            ));
        }
        Ok(())
    }
}
