//! Local session log.
//!
//! When enabled, every successfully submitted sheet is appended as one TSV
//! row to a file named from the session start time. Audit output only; it
//! is never read back and never merged with remote results.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::export::{format_session_tsv_header, format_session_tsv_row};
use crate::scoresheet::ScoreSheet;

pub struct SessionLog {
    base_dir: PathBuf,
    current: Option<PathBuf>,
}

impl SessionLog {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            current: None,
        }
    }

    /// Start a new log file with the TSV header written
    pub fn start(&mut self) -> Result<PathBuf> {
        let now = Local::now();
        fs::create_dir_all(&self.base_dir)?;

        let file = self
            .base_dir
            .join(format!("Session_{}.tsv", now.format("%Y_%m_%d_%H_%M_%S")));
        fs::write(&file, format!("{}\n", format_session_tsv_header()))?;

        self.current = Some(file.clone());
        Ok(file)
    }

    /// Append a submitted sheet. A no-op when no session was started.
    pub fn append(&self, sheet: &ScoreSheet) -> Result<()> {
        if let Some(ref path) = self.current {
            let row = format_session_tsv_row(sheet, Local::now());
            let mut file = OpenOptions::new().append(true).open(path)?;
            writeln!(file, "{}", row)?;
        }
        Ok(())
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::find_criterion;
    use tempfile::TempDir;

    fn create_temp_log() -> (SessionLog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log = SessionLog::new(temp_dir.path());
        (log, temp_dir)
    }

    fn submitted_sheet() -> ScoreSheet {
        let mut sheet = ScoreSheet::new();
        sheet.set_house("Emerald (Hijau)");
        sheet.set_judge("Hakim Tiga");
        sheet.set_score(find_criterion("c1").unwrap(), 8);
        sheet
    }

    #[test]
    fn test_new_log_has_no_session() {
        let (log, _temp) = create_temp_log();
        assert!(log.current_path().is_none());
    }

    #[test]
    fn test_start_writes_header() {
        let (mut log, _temp) = create_temp_log();
        let path = log.start().unwrap();

        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "tsv");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Timestamp\tRumah Sukan"));
    }

    #[test]
    fn test_append_rows() {
        let (mut log, _temp) = create_temp_log();
        log.start().unwrap();

        log.append(&submitted_sheet()).unwrap();
        log.append(&submitted_sheet()).unwrap();

        let content = fs::read_to_string(log.current_path().unwrap()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + two rows
        assert!(lines[1].contains("Emerald (Hijau)"));
        assert!(lines[1].contains("HAKIM TIGA"));
    }

    #[test]
    fn test_append_without_session_is_noop() {
        let (log, _temp) = create_temp_log();
        assert!(log.append(&submitted_sheet()).is_ok());
    }
}
