//! Environment variable-based configuration loading
//!
//! Recognized variables (all optional):
//!
//! | Variable | Field |
//! |---|---|
//! | `LMCHAT_PROVIDER` | `provider` |
//! | `LMCHAT_BASE_URL` | `base_url` |
//! | `LMCHAT_API_KEY` | `api_key` |
//! | `LMCHAT_MODEL` | `model` |
//! | `LMCHAT_API_VERSION` | `api_version` |
//! | `LMCHAT_SYSTEM_PROMPT` | `system_prompt` |
//! | `LMCHAT_TEMPERATURE` | `temperature` |
//! | `LMCHAT_MAX_TOKENS` | `max_tokens` |
//! | `LMCHAT_TIMEOUT_SECS` | `timeout_secs` |
//! | `LMCHAT_MAX_RETRIES` | `max_retries` |
//! | `LMCHAT_FAIL_ON_EMPTY_CONTENT` | `fail_on_empty_content` |

use super::chat_config::ChatConfig;
use super::defaults;
use crate::error::LmResult;
use crate::llm::provider_types::ProviderKind;
use tracing::warn;

pub const ENV_PREFIX: &str = "LMCHAT";

/// Overlay process environment variables onto `config`
pub fn apply_env(config: &mut ChatConfig) -> LmResult<()> {
    apply_env_with(config, |name| std::env::var(name).ok())
}

/// Overlay variables from `lookup` onto `config`.
///
/// Unparseable numbers or booleans fall back to the documented default with a
/// warning; an unknown provider is an error.
pub fn apply_env_with<F>(config: &mut ChatConfig, lookup: F) -> LmResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| {
        lookup(&format!("{}_{}", ENV_PREFIX, suffix)).filter(|value| !value.trim().is_empty())
    };

    if let Some(provider) = var("PROVIDER") {
        config.provider = provider.parse::<ProviderKind>()?;
    }
    if let Some(base_url) = var("BASE_URL") {
        config.base_url = Some(base_url.trim().to_string());
    }
    if let Some(api_key) = var("API_KEY") {
        config.api_key = Some(api_key);
    }
    if let Some(model) = var("MODEL") {
        config.model = model.trim().to_string();
    }
    if let Some(api_version) = var("API_VERSION") {
        config.api_version = Some(api_version.trim().to_string());
    }
    if let Some(prompt) = var("SYSTEM_PROMPT") {
        config.system_prompt = prompt;
    }
    if let Some(raw) = var("TEMPERATURE") {
        config.temperature = defaults::parse_temperature(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "invalid {}_TEMPERATURE, using default", ENV_PREFIX);
            defaults::TEMPERATURE
        });
    }
    if let Some(raw) = var("MAX_TOKENS") {
        config.max_tokens = defaults::parse_max_tokens(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "invalid {}_MAX_TOKENS, using default", ENV_PREFIX);
            defaults::MAX_TOKENS
        });
    }
    if let Some(raw) = var("TIMEOUT_SECS") {
        config.timeout_secs = parse_or_default(&raw, "TIMEOUT_SECS", defaults::TIMEOUT_SECS);
    }
    if let Some(raw) = var("MAX_RETRIES") {
        config.max_retries = parse_or_default(&raw, "MAX_RETRIES", defaults::MAX_RETRIES);
    }
    if let Some(raw) = var("FAIL_ON_EMPTY_CONTENT") {
        config.fail_on_empty_content = parse_bool(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "invalid {}_FAIL_ON_EMPTY_CONTENT, using default", ENV_PREFIX);
            defaults::FAIL_ON_EMPTY_CONTENT
        });
    }

    Ok(())
}

fn parse_or_default<T: std::str::FromStr>(raw: &str, suffix: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(value = %raw, "invalid {}_{}, using default", ENV_PREFIX, suffix);
        default
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
