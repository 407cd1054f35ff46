//! File-based configuration loading

use super::chat_config::ChatConfig;
use crate::error::{LmChatError, LmResult};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load configuration from a file
///
/// Supports TOML and JSON formats based on file extension (TOML unless the
/// extension is `.json`). Returns default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> LmResult<ChatConfig> {
    if !path.exists() {
        warn!(path = %path.display(), "config file not found, using defaults");
        return Ok(ChatConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        LmChatError::io_with_path(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
    })?;

    let config: ChatConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            LmChatError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
        _ => toml::from_str(&content).map_err(|e| {
            LmChatError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}
