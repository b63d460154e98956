//! Summary feed ingestion.
//!
//! The published export returns comma-separated text: a header row, then one
//! `house,score` row per house. Fields may be double-quoted (the export
//! quotes values containing commas), so the splitter is a small quote-toggle
//! state machine rather than a naive split.

use std::cmp::Ordering;

/// Placeholder the export emits for rows without a house
pub const NOT_AVAILABLE: &str = "N/A";

/// One house's aggregated standing from the summary feed
#[derive(Debug, Clone, PartialEq)]
pub struct HouseStanding {
    pub house: String,
    pub total_score: f64,
    /// Present in the row shape but never populated by the export
    pub count: u32,
}

/// Split one CSV line, honoring double-quoted fields.
///
/// A quote toggles the in-field flag; commas inside a quoted field do not
/// split. Quote characters themselves are dropped and each field is trimmed.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quote = !in_quote;
        } else if ch == ',' && !in_quote {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Parse the summary CSV into standings, sorted descending by score.
///
/// Blank lines are discarded, the first remaining line is a header to skip,
/// rows with an empty or `N/A` house are dropped, and a score field that
/// fails to parse degrades to zero.
pub fn parse_summary(csv: &str) -> Vec<HouseStanding> {
    let lines: Vec<&str> = csv.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let mut standings: Vec<HouseStanding> = lines[1..]
        .iter()
        .map(|line| {
            let fields = split_csv_line(line);
            let house = fields.first().cloned().unwrap_or_default();
            let total_score = fields
                .get(1)
                .and_then(|f| f.parse::<f64>().ok())
                .unwrap_or(0.0);
            HouseStanding {
                house,
                total_score,
                count: 0,
            }
        })
        .filter(|row| !row.house.is_empty() && row.house != NOT_AVAILABLE)
        .collect();

    standings.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });

    standings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_line() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_trims_fields() {
        assert_eq!(split_csv_line(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_csv_line(r#"Ruby (Merah),"1,234.5""#),
            vec!["Ruby (Merah)", "1,234.5"]
        );
    }

    #[test]
    fn test_split_quotes_dropped() {
        assert_eq!(
            split_csv_line(r#""Sapphire (Biru)",88.25"#),
            vec!["Sapphire (Biru)", "88.25"]
        );
    }

    #[test]
    fn test_split_empty_fields() {
        assert_eq!(split_csv_line(",x,"), vec!["", "x", ""]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_summary("").is_empty());
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse_summary("Rumah Sukan,Purata\n").is_empty());
        assert!(parse_summary("Rumah Sukan,Purata\r\n\r\n").is_empty());
    }

    #[test]
    fn test_parse_sorted_descending() {
        let csv = "Rumah,Skor\nEmerald (Hijau),70.5\nRuby (Merah),91.2\nTopaz (Kuning),84.0\n";
        let standings = parse_summary(csv);
        assert_eq!(standings.len(), 3);
        assert_eq!(standings[0].house, "Ruby (Merah)");
        assert_eq!(standings[1].house, "Topaz (Kuning)");
        assert_eq!(standings[2].house, "Emerald (Hijau)");
        for pair in standings.windows(2) {
            assert!(pair[0].total_score >= pair[1].total_score);
        }
    }

    #[test]
    fn test_parse_bad_score_becomes_zero() {
        let csv = "Rumah,Skor\n\"Ruby (Merah)\",abc\n";
        let standings = parse_summary(csv);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].house, "Ruby (Merah)");
        assert_eq!(standings[0].total_score, 0.0);
    }

    #[test]
    fn test_parse_drops_empty_and_na_houses() {
        let csv = "Rumah,Skor\n,50\nN/A,60\nSapphire (Biru),72\n";
        let standings = parse_summary(csv);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].house, "Sapphire (Biru)");
    }

    #[test]
    fn test_parse_missing_score_field() {
        let csv = "Rumah,Skor\nEmerald (Hijau)\n";
        let standings = parse_summary(csv);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].total_score, 0.0);
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let csv = "Rumah,Skor\r\n\r\nRuby (Merah),80.5\r\nTopaz (Kuning),75.0\r\n";
        let standings = parse_summary(csv);
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].total_score, 80.5);
    }

    #[test]
    fn test_count_field_stays_zero() {
        let csv = "Rumah,Skor\nRuby (Merah),80.5\n";
        assert_eq!(parse_summary(csv)[0].count, 0);
    }
}
