//! Business logic layer
//!
//! The services module holds the budget tracker, which owns the category
//! ledgers and coordinates summaries, charting and export.

pub mod tracker;

pub use tracker::{BudgetTracker, CategorySummary, ExpenseOutcome};
