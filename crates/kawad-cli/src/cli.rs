//! CLI argument definitions for kawad.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kawad")]
#[command(about = "Marching-band judging client", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "kawad.toml")]
    pub config: PathBuf,

    /// Submission webhook URL
    #[arg(long, env = "KAWAD_SCRIPT_URL")]
    pub script_url: Option<String>,

    /// Published summary CSV URL
    #[arg(long, env = "KAWAD_EXPORT_URL")]
    pub export_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an interactive judging session (default)
    Judge,
    /// Show the aggregated standings (password gated)
    Results {
        /// Gate password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
}
