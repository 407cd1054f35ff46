//! `lmchat ask`

use crate::args::ConfigOverrides;
use anyhow::Context;
use lmchat_core::{LlmClient, ask, load_config};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// Ask one question and print `{status, message, code}` on stdout
pub async fn run(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    message: &str,
) -> anyhow::Result<ExitCode> {
    let mut config = load_config(config_path).context("Failed to load configuration")?;
    overrides.apply(&mut config);
    debug!(base_url = ?config.base_url, model = %config.model, "effective configuration");

    let client = LlmClient::new()?;
    let reply = ask(&client, &config, message).await;

    println!("{}", serde_json::to_string_pretty(&reply)?);

    Ok(if reply.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
