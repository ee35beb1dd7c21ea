//! Audit logger for append-only audit log
//!
//! Provides the AuditLogger struct that writes audit entries to a log file.
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one audit entry. Nothing is read
/// back from it to restore a session.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append the entry as a JSON line and flush
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| TrackerError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file, oldest first
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                TrackerError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{CategoryName, Expense, Money};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        (AuditLogger::new(log_path), temp_dir)
    }

    #[test]
    fn test_log_and_read_back() {
        let (logger, _temp_dir) = create_test_logger();

        let expense = Expense::new(Money::from_cents(1500), "Lunch");
        logger
            .log(&AuditEntry::expense_added(
                CategoryName::Wants,
                &expense,
                Money::from_cents(28500),
            ))
            .unwrap();
        logger
            .log(&AuditEntry::exported(Path::new("Budget_2025-01-01.csv"), 1))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::ExpenseAdded);
        assert_eq!(entries[0].category, Some(CategoryName::Wants));
        assert_eq!(entries[1].operation, Operation::Exported);
    }

    #[test]
    fn test_one_json_object_per_line() {
        let (logger, _temp_dir) = create_test_logger();
        for _ in 0..3 {
            logger
                .log(&AuditEntry::exported(Path::new("out.csv"), 0))
                .unwrap();
        }

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.lines().all(|l| l.starts_with('{') && l.ends_with('}')));
    }

    #[test]
    fn test_read_missing_log() {
        let (logger, _temp_dir) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_log_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("nope").join("audit.log"));
        let err = logger
            .log(&AuditEntry::exported(Path::new("out.csv"), 0))
            .unwrap_err();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
