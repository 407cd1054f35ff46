//! Per-call client options
//!
//! [`ClientOptions`] carries everything the client needs to reach one
//! provider: wire protocol, endpoint, credentials, deployment and the
//! resilience knobs (timeout, retries, empty-content policy).
//!
//! # Examples
//!
//! ```rust
//! use lmchat_core::config::ClientOptions;
//! use lmchat_core::llm::ProviderKind;
//! use std::time::Duration;
//!
//! let options = ClientOptions::new(ProviderKind::OpenAiCompatible, "http://localhost:1234/v1/")
//!     .with_model("qwen2.5-7b-instruct")
//!     .with_timeout(Duration::from_secs(30))
//!     .with_max_retries(1);
//!
//! assert_eq!(options.base_url(), "http://localhost:1234/v1");
//! ```

use crate::config::defaults;
use crate::error::{LmChatError, LmResult};
use crate::llm::provider_types::ProviderKind;
use std::time::Duration;

/// Longest single pause between attempts
pub const MAX_BACKOFF: Duration = Duration::from_millis(2_000);

/// Upper bound of the random jitter added to each pause
pub const MAX_JITTER: Duration = Duration::from_millis(100);

/// Immutable provider options for one chat call
#[derive(Clone, PartialEq)]
pub struct ClientOptions {
    provider: ProviderKind,
    base_url: String,
    api_key: Option<String>,
    model: String,
    api_version: Option<String>,
    timeout: Duration,
    max_retries: u32,
    fail_on_empty_content: bool,
}

impl ClientOptions {
    /// Create options with defaults for everything but provider and base URL.
    ///
    /// The base URL is trimmed and loses any trailing `/`.
    pub fn new(provider: ProviderKind, base_url: impl AsRef<str>) -> Self {
        Self {
            provider,
            base_url: normalize_base_url(base_url.as_ref()),
            api_key: None,
            model: defaults::MODEL.to_string(),
            api_version: None,
            timeout: defaults::timeout(),
            max_retries: defaults::MAX_RETRIES,
            fail_on_empty_content: defaults::FAIL_ON_EMPTY_CONTENT,
        }
    }

    /// Set API key; a blank key is treated as absent
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = if api_key.trim().is_empty() {
            None
        } else {
            Some(api_key.trim().to_string())
        };
        self
    }

    /// Set model name (Azure: deployment id)
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set API version (Azure only)
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        let api_version = api_version.into();
        self.api_version = if api_version.trim().is_empty() {
            None
        } else {
            Some(api_version.trim().to_string())
        };
        self
    }

    /// Set per-attempt timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set max retries after the first attempt
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set whether a blank completion is a failure
    pub fn with_fail_on_empty_content(mut self, fail: bool) -> Self {
        self.fail_on_empty_content = fail;
        self
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn fail_on_empty_content(&self) -> bool {
        self.fail_on_empty_content
    }

    /// Total attempts the retry engine may make
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Bound on the latency of one `generate_chat` call: every attempt
    /// timing out, plus the longest possible pause between attempts.
    pub fn worst_case_latency(&self) -> Duration {
        let attempts = self.max_attempts();
        let pauses = self.max_retries;
        self.timeout
            .saturating_mul(attempts)
            .saturating_add((MAX_BACKOFF + MAX_JITTER).saturating_mul(pauses))
    }

    /// Check the options are usable before any network call
    pub fn validate(&self) -> LmResult<()> {
        if self.base_url.is_empty() {
            return Err(LmChatError::config("Base URL is not configured"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(LmChatError::config(format!(
                "Base URL '{}' must start with http:// or https://",
                self.base_url
            )));
        }
        if self.model.trim().is_empty() {
            return Err(LmChatError::config(match self.provider {
                ProviderKind::Azure => "Azure deployment id is not configured",
                ProviderKind::OpenAiCompatible => "Model name is not configured",
            }));
        }
        if self.timeout.is_zero() {
            return Err(LmChatError::config("Timeout must be greater than 0"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("model", &self.model)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("fail_on_empty_content", &self.fail_on_empty_content)
            .finish()
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Mask an API key for display
pub fn mask_api_key(key: &str) -> String {
    let len = key.chars().count();
    if len <= 12 {
        // Too short to mask meaningfully
        return "*".repeat(len);
    }

    let prefix: String = key.chars().take(8).collect();
    let suffix: String = key.chars().skip(len - 4).collect();
    let mask_len = len - 12;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}
