//! Display formatting for terminal output
//!
//! Provides utilities for formatting tracker data for terminal display,
//! including tables, status tags and running-balance listings.

pub mod report;
pub mod summary;

pub use summary::{
    allocation_line, format_expense_outcome, format_expenses, format_summary, status_label,
};
