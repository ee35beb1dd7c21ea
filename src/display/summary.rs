//! Budget summary and expense list formatting
//!
//! Formats tracker data for terminal output: the per-category summary
//! table, running-balance listings and the confirmation shown after an
//! expense is added.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{CategoryLedger, CategoryName};
use crate::services::tracker::{CategorySummary, ExpenseOutcome};

pub const OVER_BUDGET: &str = "⚠ Over Budget!";
pub const WITHIN_BUDGET: &str = "✔ Within Budget";

/// Status tag for a category
pub fn status_label(over_budget: bool) -> &'static str {
    if over_budget {
        OVER_BUDGET
    } else {
        WITHIN_BUDGET
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent / Allocation")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format the budget summary as a table, one row per category
pub fn format_summary(summary: &[CategorySummary], symbol: &str) -> String {
    let rows: Vec<SummaryRow> = summary
        .iter()
        .map(|s| SummaryRow {
            category: s.category.to_string(),
            spent: format!(
                "{} / {}",
                s.spent.format_with_symbol(symbol),
                s.allocation.format_with_symbol(symbol)
            ),
            remaining: s.remaining.format_with_symbol(symbol),
            status: status_label(s.over_budget),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("\n--- Budget Summary ---\n{}", table)
}

/// List a category's expenses with the running balance after each one
pub fn format_expenses(ledger: &CategoryLedger, symbol: &str) -> String {
    let balances = ledger.running_balances();
    if balances.is_empty() {
        return format!("\nNo expenses recorded in {}.", ledger.name());
    }

    let mut output = format!("\nExpenses for {} with Running Balance:\n", ledger.name());
    for (i, balance) in balances.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}: {} | Remaining Budget: {}\n",
            i + 1,
            balance.description,
            balance.amount.format_with_symbol(symbol),
            balance.remaining.format_with_symbol(symbol)
        ));
    }

    output
}

/// Confirmation (and warning, if overspent) after recording an expense
pub fn format_expense_outcome(outcome: &ExpenseOutcome, symbol: &str) -> String {
    let mut output = format!(
        "✅ Expense added! Remaining budget for {}: {}",
        outcome.category,
        outcome.remaining.format_with_symbol(symbol)
    );
    if let Some(overage) = outcome.overage {
        output.push_str(&format!(
            "\n⚠ Warning: You are over the {} budget by {}!",
            outcome.category,
            overage.format_with_symbol(symbol)
        ));
    }
    output
}

/// One line of the allocation banner, e.g. "  Needs    (50%): $500.00"
pub fn allocation_line(category: CategoryName, ledger: &CategoryLedger, symbol: &str) -> String {
    format!(
        "  {:<8} ({}%): {}",
        category.name(),
        category.ratio_percent(),
        ledger.allocation().format_with_symbol(symbol)
    )
}
