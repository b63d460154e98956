//! Standings view (password gated).

use anyhow::Result;
use kawad_core::app::Prompter;
use kawad_core::config::GateConfig;
use kawad_core::export::console;
use kawad_core::{Config, SessionState, SheetsApi, parse_summary};
use tracing::error;

use crate::prompt::ConsolePrompter;

/// Run the standalone results command
pub async fn run(config: &Config, password: Option<&str>) -> Result<()> {
    let prompter = ConsolePrompter::new();
    let api = SheetsApi::new(&config.endpoints)?;
    let mut state = SessionState::new();

    if let Some(password) = password {
        if !state.try_show_results(Some(password), &config.gate) {
            prompter.display_warning("Kata laluan salah!");
            anyhow::bail!("not authorized");
        }
    }

    show(&prompter, &api, &mut state, &config.gate).await
}

/// Gate, fetch, and render the standings; loops on manual refresh.
///
/// Leaves the state back in the evaluation view when the user returns.
pub async fn show<P: Prompter>(
    prompter: &P,
    api: &SheetsApi,
    state: &mut SessionState,
    gate: &GateConfig,
) -> Result<()> {
    while !state.is_authorized() {
        let input = prompter.prompt_line("Kata laluan (kosong untuk batal): ");
        if input.is_empty() {
            return Ok(());
        }
        if !state.try_show_results(Some(&input), gate) {
            prompter.display_warning("Kata laluan salah!");
        }
    }
    state.try_show_results(None, gate);

    loop {
        prompter.display_message("Memuatkan keputusan...");
        match api.fetch_summary().await {
            Ok(csv) => {
                let standings = parse_summary(&csv);
                prompter.display_message(&console::format_standings_console(&standings));
            }
            Err(e) => {
                // same policy as a failed fetch in the form: log, show no rows
                error!("Gagal mengambil data: {}", e);
                prompter.display_warning("Tiada data keputusan.");
            }
        }

        let answer = prompter.prompt_line("[r]efresh / [b]alik: ");
        if !answer.eq_ignore_ascii_case("r") {
            break;
        }
    }

    state.show_evaluation();
    Ok(())
}
