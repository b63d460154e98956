//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands (which would hit the network).

use std::path::PathBuf;

use clap::Parser;

// Re-create the Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "kawad")]
struct Args {
    #[arg(short, long, default_value = "kawad.toml")]
    config: PathBuf,

    #[arg(long, env = "KAWAD_SCRIPT_URL")]
    script_url: Option<String>,

    #[arg(long, env = "KAWAD_EXPORT_URL")]
    export_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Judge,
    Results {
        #[arg(long)]
        password: Option<String>,
    },
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["kawad"]).unwrap();
    assert!(args.command.is_none());
    assert_eq!(args.config, PathBuf::from("kawad.toml"));
}

#[test]
fn test_parse_config_path() {
    let args = Args::try_parse_from(["kawad", "--config", "other.toml"]).unwrap();
    assert_eq!(args.config, PathBuf::from("other.toml"));
}

#[test]
fn test_parse_judge_subcommand() {
    let args = Args::try_parse_from(["kawad", "judge"]).unwrap();
    assert!(matches!(args.command, Some(Command::Judge)));
}

#[test]
fn test_parse_results_with_password() {
    let args = Args::try_parse_from(["kawad", "results", "--password", "abc"]).unwrap();
    match args.command {
        Some(Command::Results { password }) => assert_eq!(password.as_deref(), Some("abc")),
        _ => panic!("expected results subcommand"),
    }
}

#[test]
fn test_parse_results_without_password() {
    let args = Args::try_parse_from(["kawad", "results"]).unwrap();
    match args.command {
        Some(Command::Results { password }) => assert!(password.is_none()),
        _ => panic!("expected results subcommand"),
    }
}

#[test]
fn test_parse_endpoint_overrides() {
    let args = Args::try_parse_from([
        "kawad",
        "--script-url",
        "http://localhost:1/hook",
        "--export-url",
        "http://localhost:1/export?output=csv",
    ])
    .unwrap();
    assert_eq!(args.script_url.as_deref(), Some("http://localhost:1/hook"));
    assert!(args.export_url.unwrap().contains("output=csv"));
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Args::try_parse_from(["kawad", "bogus"]).is_err());
}
