//! Interactive session
//!
//! A `Session` owns the tracker for the lifetime of the program together
//! with the console and the chart/export collaborators, and dispatches one
//! menu choice at a time until the user exits or input ends.

use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

use super::input::Console;
use super::menu::{format_menu, MenuChoice};
use crate::audit::{AuditEntry, AuditLogger};
use crate::chart::{has_spending, ChartRenderer, NOTHING_TO_CHART};
use crate::config::Settings;
use crate::display;
use crate::error::{TrackerError, TrackerResult};
use crate::export::Exporter;
use crate::models::{CategoryName, Money};
use crate::services::BudgetTracker;

pub const WELCOME: &str = "Welcome to the 50/30/20 Personal Budget Tracker Pro!";
pub const GOODBYE: &str = "Exiting program. Goodbye!";
pub const SALARY_PROMPT: &str = "Enter your monthly take-home salary: ";

/// Everything one run of the program works with
pub struct Session<'a, R, W> {
    tracker: BudgetTracker,
    settings: Settings,
    console: Console<R, W>,
    chart: Box<dyn ChartRenderer + 'a>,
    exporter: Box<dyn Exporter + 'a>,
    audit: Option<AuditLogger>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        tracker: BudgetTracker,
        settings: Settings,
        console: Console<R, W>,
        chart: Box<dyn ChartRenderer + 'a>,
        exporter: Box<dyn Exporter + 'a>,
    ) -> Self {
        let audit = settings.audit_log.clone().map(AuditLogger::new);
        Self {
            tracker,
            settings,
            console,
            chart,
            exporter,
            audit,
        }
    }

    /// Run the menu loop; returns the final tracker state
    pub fn run(mut self) -> TrackerResult<BudgetTracker> {
        loop {
            self.console.say(&format_menu())?;
            let Some(key) = self
                .console
                .prompt_choice("Enter choice", &MenuChoice::keys())?
            else {
                break;
            };

            let Some(choice) = MenuChoice::from_key(key) else {
                continue;
            };
            if !self.handle(choice)? {
                break;
            }
        }

        self.console.say(GOODBYE)?;
        Ok(self.tracker)
    }

    /// Dispatch one menu choice. Returns `false` when the session should end.
    fn handle(&mut self, choice: MenuChoice) -> TrackerResult<bool> {
        match choice {
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ShowSummary => {
                let summary = self.tracker.display_summary(&self.settings.currency_symbol);
                self.console.say(&summary)?;
                Ok(true)
            }
            MenuChoice::ShowChart => {
                if !has_spending(&self.tracker.chart_slices()) {
                    self.console.say(&format!("\n{}", NOTHING_TO_CHART))?;
                    return Ok(true);
                }
                self.console.output().flush()?;
                if let Err(err) = self.tracker.plot_budget(self.chart.as_mut()) {
                    self.report(&err)?;
                }
                Ok(true)
            }
            MenuChoice::ViewExpenses => self.view_expenses(),
            MenuChoice::Export => {
                self.export(Local::now().date_naive())?;
                Ok(true)
            }
            MenuChoice::Exit => Ok(false),
        }
    }

    fn add_expense(&mut self) -> TrackerResult<bool> {
        let Some(category) = self.prompt_category("Enter category")? else {
            return Ok(false);
        };
        let Some(amount) = self.console.prompt_amount("Enter expense amount: ")? else {
            return Ok(false);
        };
        let Some(description) = self.console.prompt_text("Enter description (optional): ")? else {
            return Ok(false);
        };

        let outcome = self.tracker.add_expense(category, amount, description);
        let symbol = &self.settings.currency_symbol;
        self.console
            .say(&display::format_expense_outcome(&outcome, symbol))?;

        if let Some(expense) = self.tracker.ledger(category).expenses().last() {
            let entry = AuditEntry::expense_added(category, expense, outcome.remaining);
            self.audit(&entry)?;
        }

        Ok(true)
    }

    fn view_expenses(&mut self) -> TrackerResult<bool> {
        let Some(category) = self.prompt_category("Select category to view")? else {
            return Ok(false);
        };
        let listing = self
            .tracker
            .view_expenses(category, &self.settings.currency_symbol);
        self.console.say(listing.trim_end())?;
        Ok(true)
    }

    fn export(&mut self, date: NaiveDate) -> TrackerResult<()> {
        match self.tracker.export_csv(self.exporter.as_ref(), date) {
            Ok(path) => {
                self.console.say(&format!(
                    "\n✅ Expenses exported successfully to '{}'",
                    path.display()
                ))?;
                let rows = self.tracker.export_rows().len();
                self.audit(&AuditEntry::exported(&path, rows))?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn prompt_category(&mut self, prompt: &str) -> TrackerResult<Option<CategoryName>> {
        match self.console.prompt_choice(prompt, &CategoryName::names())? {
            Some(name) => Ok(Some(name.parse()?)),
            None => Ok(None),
        }
    }

    /// Record an audit entry; a failing log is reported but never fatal
    fn audit(&mut self, entry: &AuditEntry) -> TrackerResult<()> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };
        if let Err(err) = logger.log(entry) {
            self.console.say(&format!("⚠ Audit log: {}", err))?;
        }
        Ok(())
    }

    fn report(&mut self, err: &TrackerError) -> TrackerResult<()> {
        self.console.say(&format!("❌ {}", err))
    }
}

/// Greet the user and obtain the salary, prompting unless one was supplied.
/// Returns `None` if input ends before a salary is entered.
pub fn obtain_salary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preset: Option<Money>,
) -> TrackerResult<Option<Money>> {
    console.say(WELCOME)?;
    match preset {
        Some(salary) => Ok(Some(salary)),
        None => console.prompt_amount(SALARY_PROMPT),
    }
}

/// Print the three allocations derived from the salary
pub fn announce_allocations<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tracker: &BudgetTracker,
    symbol: &str,
) -> TrackerResult<()> {
    console.say(&format!(
        "\nMonthly salary {} allocated as:",
        tracker.salary().format_with_symbol(symbol)
    ))?;
    for category in CategoryName::all() {
        console.say(&display::allocation_line(
            *category,
            tracker.ledger(*category),
            symbol,
        ))?;
    }
    Ok(())
}
