//! Export module
//!
//! The tracker turns its ledgers into [`ExportRow`]s; an [`Exporter`] decides
//! where and how they are written. `CsvExporter` writes a dated CSV file.

pub mod csv;

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::error::TrackerResult;
use crate::models::{CategoryName, Money};

pub use self::csv::{read_rows_csv, write_rows_csv, CsvExporter};

/// Column headers, in file order
pub const EXPORT_HEADER: [&str; 4] = ["Category", "Description", "Amount", "Remaining Budget"];

/// One exported expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub category: CategoryName,
    /// Description with blanks already replaced by the placeholder
    pub description: String,
    pub amount: Money,
    /// Category allocation minus everything spent up to this row
    pub remaining: Money,
}

/// Writes exported rows somewhere and reports where
pub trait Exporter {
    fn export(&self, rows: &[ExportRow], date: NaiveDate) -> TrackerResult<PathBuf>;
}

/// "Budget_2025-01-31.csv"-style file name for an export made on `date`
pub fn export_file_name(date: NaiveDate, extension: &str) -> String {
    format!("Budget_{}.{}", date.format("%Y-%m-%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(export_file_name(date, "csv"), "Budget_2025-03-07.csv");
    }
}
