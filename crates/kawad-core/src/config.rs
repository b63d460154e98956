//! Configuration.
//!
//! Every field has a compiled-in default: the deployed form's endpoints,
//! gate secret, and record settings. A `kawad.toml` may override any of
//! them; a missing or unreadable file falls back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Apps Script webhook receiving submitted sheets
const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbyk6sTLE4gwoMknBLYhqFyqR6W5yF1pvMmUr_tlUOE-iQnvBlNq-Z97srgLZwSnh8bD/exec";

/// Published CSV export of the summary range (B1:D5, pre-averaged)
const DEFAULT_EXPORT_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTY3kimy7B8BHGI8damnGF4bq9CSLJzPlhKx1ogExODEYjd86HdhkWNR9rWsdD7DYpFT5s04gGh1-jI/pub?gid=1133091578&single=true&output=csv&range=B1:D5";

const DEFAULT_GATE_PASSWORD: &str = "smkluak321";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: EndpointConfig,
    pub gate: GateConfig,
    pub record: RecordConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Submission webhook URL
    pub script_url: String,
    /// Published summary CSV URL
    pub export_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Results-view password. A UI gate, not a security boundary: the
    /// secret ships inside the client.
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// Append submitted sheets to a local session log
    pub save_local: bool,
    /// Directory for session log files
    pub session_dir: PathBuf,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            export_url: DEFAULT_EXPORT_URL.to_string(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_GATE_PASSWORD.to_string(),
        }
    }
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            save_local: false,
            session_dir: PathBuf::from("sessions"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::ConfigParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.endpoints.script_url.starts_with("https://script.google.com/"));
        assert!(config.endpoints.export_url.contains("output=csv"));
        assert_eq!(config.gate.password, DEFAULT_GATE_PASSWORD);
        assert!(!config.record.save_local);
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [gate]
            password = "rahsia"

            [record]
            save_local = true
            session_dir = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.gate.password, "rahsia");
        assert!(config.record.save_local);
        assert_eq!(config.record.session_dir, PathBuf::from("logs"));
        // untouched sections keep their defaults
        assert!(config.endpoints.script_url.starts_with("https://script.google.com/"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Config::load("does-not-exist.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kawad.toml");
        fs::write(&path, "[endpoints]\nscript_url = \"http://localhost:9999/hook\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.endpoints.script_url, "http://localhost:9999/hook");
        assert_eq!(config.gate.password, DEFAULT_GATE_PASSWORD);
    }
}
