//! Configuration surface for the `ask` operation

use super::defaults;
use super::provider::{ClientOptions, mask_api_key};
use crate::llm::provider_types::ProviderKind;
use crate::llm::request::ChatRequest;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use tracing::warn;

/// Everything the chat operation reads from configuration.
///
/// Missing fields take the values in [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Wire protocol of the LLM server
    pub provider: ProviderKind,
    /// Server base URL, e.g. `http://localhost:1234/v1`
    pub base_url: Option<String>,
    /// API key; LM Studio and most local servers need none
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model name, or Azure deployment id
    pub model: String,
    /// Azure API version
    pub api_version: Option<String>,
    /// System prompt sent ahead of every user message
    pub system_prompt: String,
    /// Accepts a number or numeric text; anything else means the default
    #[serde(deserialize_with = "lenient_temperature")]
    pub temperature: f64,
    /// Accepts a positive integer or its text; anything else means the default
    #[serde(deserialize_with = "lenient_max_tokens")]
    pub max_tokens: u32,
    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,
    /// Retries after the first attempt, for transient failures only
    pub max_retries: u32,
    /// Report a blank completion as a failure instead of placeholder text
    pub fail_on_empty_content: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            base_url: None,
            api_key: None,
            model: defaults::MODEL.to_string(),
            api_version: None,
            system_prompt: defaults::SYSTEM_PROMPT.to_string(),
            temperature: defaults::TEMPERATURE,
            max_tokens: defaults::MAX_TOKENS,
            timeout_secs: defaults::TIMEOUT_SECS,
            max_retries: defaults::MAX_RETRIES,
            fail_on_empty_content: defaults::FAIL_ON_EMPTY_CONTENT,
        }
    }
}

impl ChatConfig {
    /// True when a non-blank base URL is configured
    pub fn has_base_url(&self) -> bool {
        self.base_url
            .as_deref()
            .is_some_and(|url| !url.trim().trim_end_matches('/').is_empty())
    }

    /// Per-call client options
    pub fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::new(self.provider, self.base_url.as_deref().unwrap_or_default())
            .with_model(self.model.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_retries(self.max_retries)
            .with_fail_on_empty_content(self.fail_on_empty_content);
        if let Some(key) = &self.api_key {
            options = options.with_api_key(key.clone());
        }
        if let Some(version) = &self.api_version {
            options = options.with_api_version(version.clone());
        }
        options
    }

    /// System prompt plus `message` as a single user turn
    pub fn build_request(&self, message: &str) -> ChatRequest {
        ChatRequest::from_prompt(&self.system_prompt, message)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }

    /// Human-readable summary with the API key masked
    pub fn display_summary(&self) -> String {
        let api_key = self
            .api_key
            .as_deref()
            .map(mask_api_key)
            .unwrap_or_else(|| "(none)".to_string());
        let mut lines = vec![
            format!("provider:              {}", self.provider),
            format!(
                "base_url:              {}",
                self.base_url.as_deref().unwrap_or("(not set)")
            ),
            format!("api_key:               {}", api_key),
            format!("model:                 {}", self.model),
        ];
        if self.provider == ProviderKind::Azure {
            lines.push(format!(
                "api_version:           {}",
                self.api_version.as_deref().unwrap_or(defaults::AZURE_API_VERSION)
            ));
        }
        lines.extend([
            format!("system_prompt:         {}", self.system_prompt),
            format!("temperature:           {}", self.temperature),
            format!("max_tokens:            {}", self.max_tokens),
            format!("timeout_secs:          {}", self.timeout_secs),
            format!("max_retries:           {}", self.max_retries),
            format!("fail_on_empty_content: {}", self.fail_on_empty_content),
        ]);
        lines.join("\n")
    }
}

/// A setting written either as a number or as text
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_temperature<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let parsed = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Some(n).filter(|n| n.is_finite()),
        NumberOrText::Text(raw) => defaults::parse_temperature(&raw),
    };
    Ok(parsed.unwrap_or_else(|| {
        warn!("invalid temperature in config file, using default");
        defaults::TEMPERATURE
    }))
}

fn lenient_max_tokens<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let parsed = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Some(n)
            .filter(|n| n.fract() == 0.0 && *n >= 1.0 && *n <= u32::MAX as f64)
            .map(|n| n as u32),
        NumberOrText::Text(raw) => defaults::parse_max_tokens(&raw),
    };
    Ok(parsed.unwrap_or_else(|| {
        warn!("invalid max_tokens in config file, using default");
        defaults::MAX_TOKENS
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.provider, ProviderKind::OpenAiCompatible);
        assert_eq!(config.model, "llama-3.1-8b-instruct");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.max_retries, 2);
        assert!(config.fail_on_empty_content);
        assert!(!config.has_base_url());
    }

    #[test]
    fn test_has_base_url() {
        let mut config = ChatConfig::default();
        config.base_url = Some(" / ".to_string());
        assert!(!config.has_base_url());
        config.base_url = Some("http://localhost:1234/v1".to_string());
        assert!(config.has_base_url());
    }

    #[test]
    fn test_client_options_mapping() {
        let config = ChatConfig {
            provider: ProviderKind::Azure,
            base_url: Some("https://contoso.openai.azure.com/".to_string()),
            api_key: Some("key".to_string()),
            model: "gpt-4o".to_string(),
            api_version: Some("2024-06-01".to_string()),
            timeout_secs: 10,
            max_retries: 0,
            fail_on_empty_content: false,
            ..Default::default()
        };
        let options = config.client_options();
        assert_eq!(options.provider(), ProviderKind::Azure);
        assert_eq!(options.base_url(), "https://contoso.openai.azure.com");
        assert_eq!(options.api_key(), Some("key"));
        assert_eq!(options.model(), "gpt-4o");
        assert_eq!(options.api_version(), Some("2024-06-01"));
        assert_eq!(options.timeout(), Duration::from_secs(10));
        assert_eq!(options.max_retries(), 0);
        assert!(!options.fail_on_empty_content());
    }

    #[test]
    fn test_build_request() {
        let config = ChatConfig {
            temperature: 0.9,
            max_tokens: 64,
            ..Default::default()
        };
        let request = config.build_request("Hola");
        assert_eq!(request.messages()[0].role(), MessageRole::System);
        assert_eq!(request.messages()[1].content(), "Hola");
        assert_eq!(request.temperature(), 0.9);
        assert_eq!(request.max_tokens(), 64);
    }

    #[test]
    fn test_numeric_settings_accept_text() {
        let config: ChatConfig =
            serde_json::from_str(r#"{"temperature": "0.7", "max_tokens": "256"}"#).unwrap();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 256);

        let config: ChatConfig =
            serde_json::from_str(r#"{"temperature": 1, "max_tokens": 512}"#).unwrap();
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.max_tokens, 512);
    }

    #[test]
    fn test_unparseable_numeric_settings_use_defaults() {
        let config: ChatConfig =
            serde_json::from_str(r#"{"temperature": "warm", "max_tokens": "lots"}"#).unwrap();
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 1024);

        let config: ChatConfig =
            serde_json::from_str(r#"{"temperature": "NaN", "max_tokens": 0}"#).unwrap();
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 1024);

        let config: ChatConfig = serde_json::from_str(r#"{"max_tokens": 12.5}"#).unwrap();
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn test_summary_masks_key_and_never_serializes_it() {
        let config = ChatConfig {
            api_key: Some("sk-abcdefghijklmnop".to_string()),
            ..Default::default()
        };
        let summary = config.display_summary();
        assert!(!summary.contains("sk-abcdefghijklmnop"));
        assert!(summary.contains("mnop"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-abcdefghijklmnop"));
    }
}
