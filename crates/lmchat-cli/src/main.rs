//! lmchat command-line host
//!
//! ```bash
//! lmchat ask "What is Rust?" --base-url http://localhost:1234/v1
//! lmchat config show --config lmchat.toml
//! ```
//!
//! Settings come from defaults, an optional config file, `LMCHAT_*`
//! environment variables (a `.env` file is honored) and finally flags.

mod args;
mod commands;
mod logging;
mod router;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_json);

    router::route(cli).await
}
