//! Top-level view state and the interactive form flow.
//!
//! The client has two views: score entry (`Evaluation`) and the aggregated
//! standings (`Results`). The results view sits behind a plaintext password
//! gate; authorization sticks for the process lifetime once granted.

use crate::config::GateConfig;
use crate::rubric::{self, HOUSE_OPTIONS};
use crate::scoresheet::ScoreSheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Evaluation,
    Results,
}

/// Console interaction seam.
///
/// The form flow drives one of these; the CLI supplies a stdin/stdout
/// implementation and tests a scripted one.
pub trait Prompter {
    /// Show `prompt` and read a line of input, trimmed
    fn prompt_line(&self, prompt: &str) -> String;

    /// Show `prompt` and read an integer, re-asking until one parses
    fn prompt_number(&self, prompt: &str) -> i64;

    /// Display a message to the user
    fn display_message(&self, message: &str);

    /// Display a warning message
    fn display_warning(&self, message: &str);
}

/// Per-process view state.
///
/// Not a security boundary: the gate secret ships inside the client. The
/// gate only keeps the standings screen off the judges' default path.
#[derive(Debug, Default)]
pub struct SessionState {
    view: View,
    authorized: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn show_evaluation(&mut self) {
        self.view = View::Evaluation;
    }

    /// Attempt to enter the results view.
    ///
    /// Without prior authorization the given input must match the gate
    /// password; once it has matched, later calls succeed without input.
    pub fn try_show_results(&mut self, input: Option<&str>, gate: &GateConfig) -> bool {
        if !self.authorized {
            match input {
                Some(password) if password == gate.password => self.authorized = true,
                _ => return false,
            }
        }
        self.view = View::Results;
        true
    }
}

/// Prompt for the house selection and judge name
pub fn collect_identity<P: Prompter>(prompter: &P, sheet: &mut ScoreSheet) {
    prompter.display_message("Rumah sukan:");
    for (index, house) in HOUSE_OPTIONS.iter().enumerate() {
        prompter.display_message(&format!("  {}. {}", index + 1, house));
    }

    loop {
        let pick = prompter.prompt_number("Pilih rumah sukan: ");
        if (1..=HOUSE_OPTIONS.len() as i64).contains(&pick) {
            sheet.set_house(HOUSE_OPTIONS[(pick - 1) as usize]);
            break;
        }
        prompter.display_warning("Pilihan tidak sah.");
    }

    // may be left empty; submission validates
    sheet.set_judge(&prompter.prompt_line("Nama hakim: "));
}

/// Walk the rubric prompting for every criterion score.
///
/// Raw input is clamped into each criterion's range; the judge is told when
/// an entry was adjusted.
pub fn collect_scores<P: Prompter>(prompter: &P, sheet: &mut ScoreSheet) {
    for section in rubric::sections() {
        prompter.display_message(&format!("\n{} (max {})", section.title, section.total_max));

        for criterion in section.criteria {
            let raw = prompter.prompt_number(&format!(
                "  {} [0-{}]: ",
                criterion.description, criterion.max_score
            ));
            let score = sheet.set_score(criterion, raw);
            if i64::from(score) != raw {
                prompter.display_warning(&format!("Skor diselaraskan kepada {}.", score));
            }
        }

        prompter.display_message(&format!(
            "  Jumlah {}: {}/{}",
            section.id,
            sheet.section_total(section),
            section.total_max
        ));
    }
}

/// Prompt for the free-text remarks
pub fn collect_remarks<P: Prompter>(prompter: &P, sheet: &mut ScoreSheet) {
    sheet.remarks = prompter.prompt_line("Ulasan (boleh kosong): ");
}
