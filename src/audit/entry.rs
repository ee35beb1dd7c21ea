//! Audit entry data structures
//!
//! Defines the operations that are audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;

use crate::models::{CategoryName, Expense, Money};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// An expense was recorded
    ExpenseAdded,
    /// Expenses were exported to a file
    Exported,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Category affected, if the operation concerns a single one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryName>,

    /// Human-readable one-line summary
    pub summary: String,

    /// Structured details of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly recorded expense
    pub fn expense_added(category: CategoryName, expense: &Expense, remaining: Money) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::ExpenseAdded,
            category: Some(category),
            summary: format!(
                "{}: {} ({}), remaining {}",
                category,
                expense.display_description(),
                expense.amount,
                remaining
            ),
            details: Some(json!({
                "expense": expense,
                "remaining": remaining,
            })),
        }
    }

    /// Entry for a completed export
    pub fn exported(path: &Path, rows: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Exported,
            category: None,
            summary: format!("{} rows exported to {}", rows, path.display()),
            details: Some(json!({
                "path": path.display().to_string(),
                "rows": rows,
            })),
        }
    }
}
