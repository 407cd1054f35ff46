//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use std::process::ExitCode;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Ask { message, overrides } => {
            commands::ask::run(config_path, &overrides, &message).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(config_path),
            ConfigAction::Validate => commands::config::validate(config_path),
        },
    }
}
