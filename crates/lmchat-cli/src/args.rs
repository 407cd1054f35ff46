//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use lmchat_core::{ChatConfig, ProviderKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lmchat")]
#[command(about = "Ask a local or hosted LLM server a question")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML or JSON configuration file
    #[arg(long, global = true, env = "LMCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message and print the reply as JSON
    Ask {
        /// The user message
        message: String,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Display the effective settings (API key masked)
    Show,

    /// Check that the settings are usable
    Validate,
}

/// Flags that override file and environment settings
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Server protocol: openai-compatible (alias lmstudio) or azure
    #[arg(long)]
    pub provider: Option<ProviderKind>,

    /// Server base URL, e.g. http://localhost:1234/v1
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model name or Azure deployment id
    #[arg(long)]
    pub model: Option<String>,

    /// Azure API version
    #[arg(long)]
    pub api_version: Option<String>,

    /// System prompt
    #[arg(long)]
    pub system_prompt: Option<String>,

    #[arg(long)]
    pub temperature: Option<f64>,

    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Per-attempt timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Retries for transient failures
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Return placeholder text instead of failing on an empty completion
    #[arg(long)]
    pub allow_empty: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut ChatConfig) {
        if let Some(provider) = self.provider {
            config.provider = provider;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(api_version) = &self.api_version {
            config.api_version = Some(api_version.clone());
        }
        if let Some(prompt) = &self.system_prompt {
            config.system_prompt = prompt.clone();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = self.max_retries {
            config.max_retries = max_retries;
        }
        if self.allow_empty {
            config.fail_on_empty_content = false;
        }
    }
}
