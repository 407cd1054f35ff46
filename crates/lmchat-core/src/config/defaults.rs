//! Default configuration values
//!
//! These apply whenever a setting is absent or cannot be parsed.

use std::time::Duration;

/// Default model (or Azure deployment id)
pub const MODEL: &str = "llama-3.1-8b-instruct";

/// Default system prompt sent ahead of the user's message
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Default sampling temperature
pub const TEMPERATURE: f64 = 0.2;

/// Default completion budget
pub const MAX_TOKENS: u32 = 1024;

/// Default per-attempt timeout (45 seconds)
pub const TIMEOUT_SECS: u64 = 45;

/// Default number of retries after the first attempt
pub const MAX_RETRIES: u32 = 2;

/// Whether blank completions are reported as failures by default
pub const FAIL_ON_EMPTY_CONTENT: bool = true;

/// Azure OpenAI API version used when none is configured
pub const AZURE_API_VERSION: &str = "2024-02-01";

/// Get the default timeout as Duration
pub fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

/// Parse a temperature; `None` for text that is not a finite number.
///
/// Callers fall back to [`TEMPERATURE`].
pub fn parse_temperature(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|t| t.is_finite())
}

/// Parse a max-token budget; `None` unless it is a positive integer.
///
/// Callers fall back to [`MAX_TOKENS`].
pub fn parse_max_tokens(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
