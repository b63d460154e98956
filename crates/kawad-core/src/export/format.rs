use chrono::{DateTime, Local};
use serde_json::{Value as JsonValue, json};

use crate::rubric::{SectionId, section};
use crate::scoresheet::ScoreSheet;

/// Build the webhook payload for a completed sheet.
///
/// The key set is fixed by the receiving Apps Script; section totals are
/// flattened into one field per section.
pub fn format_post_payload(sheet: &ScoreSheet) -> JsonValue {
    json!({
        "rumahSukan": sheet.house(),
        "namaHakim": sheet.judge(),
        "sectionA": sheet.section_total(section(SectionId::A)),
        "sectionB": sheet.section_total(section(SectionId::B)),
        "sectionC": sheet.section_total(section(SectionId::C)),
        "sectionD": sheet.section_total(section(SectionId::D)),
        "sectionE": sheet.section_total(section(SectionId::E)),
        "totalScore": sheet.grand_total(),
        "ulasan": sheet.remarks,
    })
}

pub fn format_session_tsv_header() -> String {
    [
        "Timestamp",
        "Rumah Sukan",
        "Hakim",
        "Section A",
        "Section B",
        "Section C",
        "Section D",
        "Section E",
        "Total",
        "Ulasan",
    ]
    .join("\t")
}

/// One session-log row for a submitted sheet.
///
/// Remarks are flattened to a single line so the row stays one record.
pub fn format_session_tsv_row(sheet: &ScoreSheet, timestamp: DateTime<Local>) -> String {
    let remarks = sheet
        .remarks
        .replace(['\t', '\n', '\r'], " ")
        .trim()
        .to_string();

    let mut values = vec![timestamp.to_rfc3339(), sheet.house().to_string(), sheet.judge().to_string()];
    for id in [SectionId::A, SectionId::B, SectionId::C, SectionId::D, SectionId::E] {
        values.push(sheet.section_total(section(id)).to_string());
    }
    values.push(sheet.grand_total().to_string());
    values.push(remarks);

    values.join("\t")
}
