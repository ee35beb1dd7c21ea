//! Budget Tracker - 50/30/20 personal budgeting in the terminal
//!
//! This library provides the core functionality for the `budget` binary. A
//! monthly salary is split into Needs (50%), Wants (30%) and Savings (20%);
//! expenses are recorded against each category and reported as summaries,
//! running balances, a pie chart and a CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, the three categories and per-category ledgers
//! - `services`: The budget tracker owning the ledgers
//! - `display`: Terminal formatting of summaries and expense lists
//! - `chart`: Chart renderer trait with pie and text implementations
//! - `export`: Exporter trait and CSV export
//! - `audit`: Optional JSONL audit log
//! - `config`: Settings
//! - `cli`: Prompts, menu and the interactive session
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use budget_tracker::models::{CategoryName, Money};
//! use budget_tracker::services::BudgetTracker;
//!
//! let mut tracker = BudgetTracker::new(Money::from_cents(100_000)).unwrap();
//! let outcome = tracker.add_expense(CategoryName::Needs, Money::from_cents(60_000), "Rent");
//! assert_eq!(outcome.overage, Some(Money::from_cents(10_000)));
//! ```

pub mod audit;
pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{TrackerError, TrackerResult};
