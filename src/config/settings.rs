//! User settings for the budget tracker
//!
//! Settings come from built-in defaults, optionally overridden by a JSON
//! settings file, then by command-line flags (see `main.rs`).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// How the spending chart is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Full-screen pie chart (default)
    #[default]
    Tui,
    /// Plain-text bars, for pipes and terminals without raw mode
    Text,
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Directory CSV exports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Chart renderer
    #[serde(default)]
    pub chart: ChartMode,

    /// Optional JSONL audit log of expenses and exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<PathBuf>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            export_dir: default_export_dir(),
            chart: ChartMode::default(),
            audit_log: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, TrackerError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load from `path` if given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, TrackerError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
