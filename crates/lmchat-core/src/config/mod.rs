//! Configuration management for lmchat
//!
//! Sources are layered, later overriding earlier: built-in defaults, an
//! optional TOML/JSON file, then `LMCHAT_*` environment variables.

mod chat_config;
pub mod defaults;
pub mod env_loader;
pub mod file_loader;
pub mod provider;

pub use chat_config::ChatConfig;
pub use provider::ClientOptions;

use crate::error::LmResult;
use std::path::Path;
use tracing::debug;

/// Load configuration from defaults, an optional file and the environment
pub fn load_config(path: Option<&Path>) -> LmResult<ChatConfig> {
    let mut config = match path {
        Some(path) => file_loader::load_from_file(path)?,
        None => ChatConfig::default(),
    };
    env_loader::apply_env(&mut config)?;
    debug!(provider = %config.provider, model = %config.model, "configuration loaded");
    Ok(config)
}
