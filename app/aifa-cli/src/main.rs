//! aifa - client identity and phone login
//!
//! Bootstraps the device's client identity on every run, then performs the
//! requested command and prints the result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Show the current identities (registers the device on first run)
//! aifa status --pretty
//!
//! # Log in by phone
//! aifa send-code 13800000000
//! aifa login 13800000000 --code 123456
//! ```

mod app_context;
mod cli;
mod commands;
mod error;
mod logger;

#[cfg(test)]
mod tests;

use crate::{app_context::AppContext, cli::Cli, error::Result as CliResult};

use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let config = aifa_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting aifa v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let storage_path = config.storage_path()?;
    let context = AppContext::new(config, storage_path)?;
    context.run(cli.command).await
}
