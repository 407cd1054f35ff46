//! Configuration commands

use lmchat_core::{ChatConfig, LmChatError, LmResult, load_config};
use std::path::Path;
use std::process::ExitCode;

/// Show the effective configuration
pub fn show(config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = load_config(config_path)?;
    if let Some(path) = config_path {
        println!("# from {} and the environment", path.display());
    }
    println!("{}", config.display_summary());
    Ok(ExitCode::SUCCESS)
}

/// Validate the effective configuration
pub fn validate(config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = load_config(config_path)?;
    match check(&config) {
        Ok(()) => {
            println!("Configuration is valid");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("Configuration is invalid: {}", error.message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn check(config: &ChatConfig) -> LmResult<()> {
    if !config.has_base_url() {
        return Err(LmChatError::config("base_url is not set"));
    }
    config.client_options().validate()
}
