//! Interactive judging session.

use anyhow::Result;
use kawad_core::app::{self, Prompter};
use kawad_core::export::{console, format_post_payload};
use kawad_core::{Config, ScoreSheet, SessionLog, SessionState, SheetsApi};
use tracing::{error, info, warn};

use crate::commands::results;
use crate::prompt::ConsolePrompter;

/// Run the judging session loop
pub async fn run(config: &Config) -> Result<()> {
    let prompter = ConsolePrompter::new();
    let api = SheetsApi::new(&config.endpoints)?;
    let mut state = SessionState::new();

    let mut session_log = SessionLog::new(&config.record.session_dir);
    if config.record.save_local {
        match session_log.start() {
            Ok(path) => info!("Session log at {:?}", path),
            Err(e) => warn!("Failed to start session log: {}", e),
        }
    }

    let mut sheet = ScoreSheet::new();

    'session: loop {
        app::collect_identity(&prompter, &mut sheet);
        app::collect_scores(&prompter, &mut sheet);
        app::collect_remarks(&prompter, &mut sheet);

        prompter.display_message(&console::format_sheet_console(&sheet));

        loop {
            let answer = prompter.prompt_line("[h]antar / [e]dit / [k]eputusan / [q]uit: ");
            match answer.to_lowercase().as_str() {
                "h" => {
                    // an invalid sheet never reaches the network
                    if let Err(e) = sheet.validate() {
                        prompter.display_warning(&e.to_string());
                        continue 'session;
                    }
                    if !submit(&prompter, &api, &session_log, &mut sheet).await {
                        continue;
                    }
                    loop {
                        let next = prompter.prompt_line("[b]aru / [k]eputusan / [q]uit: ");
                        match next.to_lowercase().as_str() {
                            "b" => continue 'session,
                            "k" => {
                                results::show(&prompter, &api, &mut state, &config.gate).await?;
                            }
                            "q" => break 'session,
                            _ => {}
                        }
                    }
                }
                "e" => continue 'session,
                "k" => results::show(&prompter, &api, &mut state, &config.gate).await?,
                "q" => break 'session,
                _ => {}
            }
        }
    }

    Ok(())
}

/// Send the sheet; returns true when it was delivered and reset
async fn submit<P: Prompter>(
    prompter: &P,
    api: &SheetsApi,
    session_log: &SessionLog,
    sheet: &mut ScoreSheet,
) -> bool {
    prompter.display_message("Menghantar skor...");

    match api.submit(&format_post_payload(sheet)).await {
        Ok(()) => {
            info!(
                "Submitted sheet for {} by {} (total {})",
                sheet.house(),
                sheet.judge(),
                sheet.grand_total()
            );
            prompter.display_message("Skor dihantar. Terima kasih!");

            if let Err(e) = session_log.append(sheet) {
                warn!("Failed to append session log: {}", e);
            }

            sheet.reset();
            true
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            prompter.display_warning("Penghantaran gagal. Sila cuba lagi.");
            false
        }
    }
}
