//! Configuration module
//!
//! Settings for output formatting, export location, chart mode and the
//! optional audit log.

pub mod settings;

pub use settings::{ChartMode, Settings};
