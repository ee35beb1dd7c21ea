//! CSV Export functionality
//!
//! Writes one row per expense with its running remaining budget, and can
//! read such a file back.

use chrono::NaiveDate;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use super::{export_file_name, ExportRow, Exporter, EXPORT_HEADER};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryName, Money};

/// Writes `Budget_<date>.csv` into a directory, replacing any same-day file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the export for `date` is written to
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(export_file_name(date, "csv"))
    }
}

impl Exporter for CsvExporter {
    fn export(&self, rows: &[ExportRow], date: NaiveDate) -> TrackerResult<PathBuf> {
        let path = self.path_for(date);
        let file = File::create(&path).map_err(|e| {
            TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        write_rows_csv(rows, file)
            .map_err(|e| TrackerError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(path)
    }
}

/// Write the header and all rows as CSV
pub fn write_rows_csv<W: Write>(rows: &[ExportRow], writer: W) -> TrackerResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(EXPORT_HEADER)?;
    for row in rows {
        writer.write_record([
            row.category.name(),
            row.description.as_str(),
            row.amount.format_plain().as_str(),
            row.remaining.format_plain().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Read rows back from a file produced by [`write_rows_csv`]
pub fn read_rows_csv<R: Read>(reader: R) -> TrackerResult<Vec<ExportRow>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?;
    if headers.iter().ne(EXPORT_HEADER.iter().copied()) {
        return Err(TrackerError::Export(format!(
            "Unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let parse_money = |field: &str| {
        Money::parse(field).map_err(|e| TrackerError::Export(e.to_string()))
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or_default();

        rows.push(ExportRow {
            category: field(0).parse::<CategoryName>()?,
            description: field(1).to_string(),
            amount: parse_money(field(2))?,
            remaining: parse_money(field(3))?,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_rows() -> Vec<ExportRow> {
        vec![
            ExportRow {
                category: CategoryName::Needs,
                description: "Groceries, weekly".into(),
                amount: Money::from_cents(20000),
                remaining: Money::from_cents(30000),
            },
            ExportRow {
                category: CategoryName::Needs,
                description: "Rent \"March\"".into(),
                amount: Money::from_cents(40000),
                remaining: Money::from_cents(-10000),
            },
        ]
    }

    #[test]
    fn test_write_rows_csv() {
        let mut output = Vec::new();
        write_rows_csv(&sample_rows(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Category,Description,Amount,Remaining Budget");
        assert_eq!(lines[1], "Needs,\"Groceries, weekly\",200.00,300.00");
        assert_eq!(lines[2], "Needs,\"Rent \"\"March\"\"\",400.00,-100.00");
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let mut output = Vec::new();
        write_rows_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Category,Description,Amount,Remaining Budget\n"
        );
    }

    #[test]
    fn test_read_back() {
        let mut output = Vec::new();
        write_rows_csv(&sample_rows(), &mut output).unwrap();

        let rows = read_rows_csv(output.as_slice()).unwrap();
        assert_eq!(rows, sample_rows());
    }

    #[test]
    fn test_read_rejects_foreign_header() {
        let data = "Date,Payee,Amount\n2025-01-01,Shop,10.00\n";
        let err = read_rows_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, TrackerError::Export(_)));
    }

    #[test]
    fn test_exporter_writes_dated_file_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp_dir.path());
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let path = exporter.export(&sample_rows(), date).unwrap();
        assert_eq!(path, temp_dir.path().join("Budget_2025-01-15.csv"));

        let path = exporter.export(&sample_rows()[..1], date).unwrap();
        let rows = read_rows_csv(File::open(&path).unwrap()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_exporter_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp_dir.path().join("missing").join("dir"));
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let err = exporter.export(&sample_rows(), date).unwrap_err();
        assert!(matches!(err, TrackerError::Export(msg) if msg.contains("Failed to create file")));
    }
}
