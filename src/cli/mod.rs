//! Interactive console front end
//!
//! This module contains the prompt helpers, the numbered menu and the
//! session loop bridging user input with the budget tracker.

pub mod input;
pub mod menu;
pub mod session;

use std::io::{BufRead, Write};

use crate::chart::ChartRenderer;
use crate::config::Settings;
use crate::error::TrackerResult;
use crate::export::Exporter;
use crate::models::Money;
use crate::services::BudgetTracker;

pub use input::{parse_amount, Console};
pub use menu::MenuChoice;
pub use session::{announce_allocations, obtain_salary, Session};

/// Run a complete interactive session: greeting, salary, allocations, menu loop.
///
/// Returns the final tracker, or `None` if input ended before a salary was given.
pub fn run_interactive<'a, R: BufRead, W: Write>(
    mut console: Console<R, W>,
    settings: Settings,
    salary: Option<Money>,
    chart: Box<dyn ChartRenderer + 'a>,
    exporter: Box<dyn Exporter + 'a>,
) -> TrackerResult<Option<BudgetTracker>> {
    let Some(salary) = obtain_salary(&mut console, salary)? else {
        return Ok(None);
    };

    let tracker = BudgetTracker::new(salary)?;
    announce_allocations(&mut console, &tracker, &settings.currency_symbol)?;

    Session::new(tracker, settings, console, chart, exporter)
        .run()
        .map(Some)
}
