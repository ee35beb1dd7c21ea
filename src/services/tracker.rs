//! Budget tracker service
//!
//! Splits a salary 50/30/20 into three category ledgers, routes expenses to
//! them, and builds the summary, chart and export views from their state.

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::chart::{ChartRenderer, ChartSlice, CHART_TITLE};
use crate::display;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{ExportRow, Exporter};
use crate::models::{CategoryLedger, CategoryName, Money};

/// The three ledgers, one per category
#[derive(Debug, Clone)]
struct Ledgers {
    needs: CategoryLedger,
    wants: CategoryLedger,
    savings: CategoryLedger,
}

impl Ledgers {
    fn get(&self, name: CategoryName) -> &CategoryLedger {
        match name {
            CategoryName::Needs => &self.needs,
            CategoryName::Wants => &self.wants,
            CategoryName::Savings => &self.savings,
        }
    }

    fn get_mut(&mut self, name: CategoryName) -> &mut CategoryLedger {
        match name {
            CategoryName::Needs => &mut self.needs,
            CategoryName::Wants => &mut self.wants,
            CategoryName::Savings => &mut self.savings,
        }
    }
}

/// Result of recording an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseOutcome {
    pub category: CategoryName,
    /// Remaining budget for the category after this expense
    pub remaining: Money,
    /// How far over budget the category now is, if at all
    pub overage: Option<Money>,
}

/// Spending snapshot for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: CategoryName,
    pub allocation: Money,
    pub spent: Money,
    pub remaining: Money,
    pub over_budget: bool,
}

/// Session budget: one salary, three category ledgers
#[derive(Debug, Clone)]
pub struct BudgetTracker {
    salary: Money,
    ledgers: Ledgers,
}

impl BudgetTracker {
    /// Split `salary` into Needs (50%), Wants (30%) and Savings (20%).
    ///
    /// Needs and Wants are rounded to the cent; Savings takes what is left so
    /// the three allocations always add up to the salary exactly.
    pub fn new(salary: Money) -> TrackerResult<Self> {
        if salary.is_negative() {
            return Err(TrackerError::InvalidInput(format!(
                "salary must not be negative, got {}",
                salary
            )));
        }

        let needs = salary.percent(CategoryName::Needs.ratio_percent());
        let wants = salary.percent(CategoryName::Wants.ratio_percent());
        let savings = salary - needs - wants;

        Ok(Self {
            salary,
            ledgers: Ledgers {
                needs: CategoryLedger::new(CategoryName::Needs, needs),
                wants: CategoryLedger::new(CategoryName::Wants, wants),
                savings: CategoryLedger::new(CategoryName::Savings, savings),
            },
        })
    }

    pub fn salary(&self) -> Money {
        self.salary
    }

    pub fn ledger(&self, name: CategoryName) -> &CategoryLedger {
        self.ledgers.get(name)
    }

    /// Ledgers in display order
    pub fn ledgers(&self) -> impl Iterator<Item = &CategoryLedger> + '_ {
        CategoryName::all().iter().map(move |name| self.ledgers.get(*name))
    }

    /// Record an expense and report the category's new standing
    pub fn add_expense(
        &mut self,
        name: CategoryName,
        amount: Money,
        description: impl Into<String>,
    ) -> ExpenseOutcome {
        let ledger = self.ledgers.get_mut(name);
        ledger.add_expense(amount, description);

        let remaining = ledger.remaining_budget();
        ExpenseOutcome {
            category: name,
            remaining,
            overage: remaining.is_negative().then(|| -remaining),
        }
    }

    /// Like [`add_expense`](Self::add_expense), looking the category up by name
    pub fn add_expense_named(
        &mut self,
        name: &str,
        amount: Money,
        description: impl Into<String>,
    ) -> TrackerResult<ExpenseOutcome> {
        let category = name.parse::<CategoryName>()?;
        Ok(self.add_expense(category, amount, description))
    }

    /// Fresh spent/remaining/over-budget figures for every category
    pub fn category_summary(&self) -> Vec<CategorySummary> {
        self.ledgers()
            .map(|ledger| CategorySummary {
                category: ledger.name(),
                allocation: ledger.allocation(),
                spent: ledger.total_spent(),
                remaining: ledger.remaining_budget(),
                over_budget: ledger.is_over_budget(),
            })
            .collect()
    }

    /// Summary table as printed by the menu
    pub fn display_summary(&self, symbol: &str) -> String {
        display::format_summary(&self.category_summary(), symbol)
    }

    /// Running-balance listing for one category
    pub fn view_expenses(&self, name: CategoryName, symbol: &str) -> String {
        display::format_expenses(self.ledger(name), symbol)
    }

    /// One slice per category, coloured by over-budget status
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        self.ledgers()
            .map(|ledger| {
                let name = ledger.name();
                let spent = ledger.total_spent();
                let over_budget = ledger.is_over_budget();
                ChartSlice {
                    category: name,
                    label: format!(
                        "{} ({}/{})",
                        name,
                        spent.round_units(),
                        ledger.allocation().round_units()
                    ),
                    value: spent,
                    color: if over_budget {
                        name.dark_color()
                    } else {
                        name.light_color()
                    },
                    over_budget,
                }
            })
            .collect()
    }

    /// Hand the spending breakdown to a chart renderer
    pub fn plot_budget(&self, renderer: &mut dyn ChartRenderer) -> TrackerResult<()> {
        renderer.render(CHART_TITLE, &self.chart_slices())
    }

    /// Every expense with its running remaining budget, category by category
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.ledgers()
            .flat_map(|ledger| {
                let mut remaining = ledger.allocation();
                ledger.expenses().iter().map(move |expense| {
                    remaining -= expense.amount;
                    ExportRow {
                        category: ledger.name(),
                        description: expense.display_description().to_string(),
                        amount: expense.amount,
                        remaining,
                    }
                })
            })
            .collect()
    }

    /// Write all expenses through `exporter`, returning the file written
    pub fn export_csv(&self, exporter: &dyn Exporter, date: NaiveDate) -> TrackerResult<PathBuf> {
        exporter.export(&self.export_rows(), date)
    }
}
