//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::rubric::{self, GRAND_MAX};
use crate::scoresheet::ScoreSheet;
use crate::summary::HouseStanding;

const BAR_WIDTH: usize = 40;

/// House color keyed on the Malay color word in the house name
pub fn house_color(name: &str) -> (u8, u8, u8) {
    if name.contains("Merah") {
        (230, 57, 70)
    } else if name.contains("Biru") {
        (0, 119, 182)
    } else if name.contains("Hijau") {
        (42, 157, 143)
    } else if name.contains("Kuning") {
        (255, 209, 102)
    } else {
        (26, 26, 26)
    }
}

fn score_bar(score: f64, max: u32, width: usize) -> String {
    let ratio = (score / f64::from(max)).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a sheet for review before submission.
///
/// Returns a multi-line string with a boxed format: identity line, one line
/// per section with its total against the ceiling, grand total with a
/// progress bar, and the remarks when present.
pub fn format_sheet_console(sheet: &ScoreSheet) -> String {
    let mut output = String::new();

    let house = if sheet.house().is_empty() {
        "(belum dipilih)".to_string()
    } else {
        sheet.house().to_string()
    };
    let judge = if sheet.judge().is_empty() {
        "(belum diisi)".to_string()
    } else {
        sheet.judge().to_string()
    };

    let border: String = "━".repeat(60);
    let border_dim = border.dimmed();

    let (r, g, b) = house_color(sheet.house());

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {}  Hakim: {}",
        house.truecolor(r, g, b).bold(),
        judge.bold()
    );
    let _ = writeln!(output, "{}", border_dim);

    for section in rubric::sections() {
        let total = sheet.section_total(section);
        let _ = writeln!(
            output,
            "  {:<38} {:>3} / {}",
            section.title, total, section.total_max
        );
    }

    let grand = sheet.grand_total();
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  JUMLAH : {} / {}",
        grand.bold(),
        GRAND_MAX
    );
    let _ = writeln!(
        output,
        "  {}",
        score_bar(f64::from(grand), GRAND_MAX, BAR_WIDTH).truecolor(230, 57, 70)
    );
    if !sheet.remarks.is_empty() {
        let _ = writeln!(output, "  ULASAN : {}", sheet.remarks);
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format standings as a bar chart followed by a ranking table.
///
/// Bars are proportional to the 100-point ceiling and colored per house;
/// the leader's row is highlighted in the table.
pub fn format_standings_console(standings: &[HouseStanding]) -> String {
    let mut output = String::new();

    if standings.is_empty() {
        let _ = write!(output, "  Tiada data keputusan.");
        return output;
    }

    let border: String = "━".repeat(72);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    for standing in standings {
        let (r, g, b) = house_color(&standing.house);
        let bar = score_bar(standing.total_score, GRAND_MAX, BAR_WIDTH);
        let _ = writeln!(
            output,
            "  {:<18} {} {:>7.2}",
            standing.house,
            bar.truecolor(r, g, b),
            standing.total_score
        );
    }
    let _ = writeln!(output, "{}", border_dim);

    let _ = writeln!(output, "  {:<4} {:<22} {:>10}", "POS", "RUMAH SUKAN", "JUMLAH");
    for (index, standing) in standings.iter().enumerate() {
        let position = index + 1;
        let score = format!("{:.2}", standing.total_score);
        if index == 0 {
            let _ = writeln!(
                output,
                "  {:<4} {:<22} {:>10}",
                position.truecolor(255, 209, 102).bold(),
                standing.house.bold(),
                score.bold()
            );
        } else {
            let _ = writeln!(output, "  {:<4} {:<22} {:>10}", position, standing.house, score);
        }
    }
    let _ = write!(output, "{}", border_dim);

    output
}
