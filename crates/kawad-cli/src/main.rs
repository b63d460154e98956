use anyhow::Result;
use clap::Parser;
use kawad_core::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod prompt;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("kawad=info".parse()?)
                .add_directive("kawad_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    // Load config
    let mut config = match Config::load(&args.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", args.config);
            c
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    };

    // CLI/env overrides win over file and defaults
    if let Some(url) = args.script_url {
        config.endpoints.script_url = url;
    }
    if let Some(url) = args.export_url {
        config.endpoints.export_url = url;
    }

    match args.command.unwrap_or(Command::Judge) {
        Command::Judge => commands::judge::run(&config).await,
        Command::Results { password } => commands::results::run(&config, password.as_deref()).await,
    }
}
