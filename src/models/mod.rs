//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the budgeting
//! domain: money, the three fixed categories, and per-category ledgers.

pub mod category;
pub mod ledger;
pub mod money;

pub use category::{CategoryName, Rgb};
pub use ledger::{CategoryLedger, Expense, RunningBalance, NO_DESCRIPTION};
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
