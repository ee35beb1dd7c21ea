//! Spending chart
//!
//! The tracker only builds [`ChartSlice`]s; drawing them is the job of a
//! [`ChartRenderer`]. Two renderers are provided:
//!
//! - `TerminalPieChart`: full-screen pie chart drawn with ratatui
//! - `TextChart`: plain-text bars for pipes and dumb terminals

pub mod pie;
pub mod text;

use crate::error::TrackerResult;
use crate::models::{CategoryName, Money, Rgb};

pub use pie::TerminalPieChart;
pub use text::TextChart;

/// Chart heading
pub const CHART_TITLE: &str = "Actual Spending vs Recommended Budget (50/30/20 Rule)";

/// One category's wedge of the pie
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: CategoryName,
    /// "<Name> (<spent>/<allocation>)"
    pub label: String,
    /// Amount spent in the category
    pub value: Money,
    pub color: Rgb,
    pub over_budget: bool,
}

/// Anything that can display the spending breakdown
pub trait ChartRenderer {
    fn render(&mut self, title: &str, slices: &[ChartSlice]) -> TrackerResult<()>;
}

/// Share of the total for each slice, in percent. All zeros when nothing was spent.
pub fn slice_percentages(slices: &[ChartSlice]) -> Vec<f64> {
    let total: Money = slices.iter().map(|s| s.value).sum();
    if !total.is_positive() {
        return vec![0.0; slices.len()];
    }
    slices
        .iter()
        .map(|s| s.value.as_f64() / total.as_f64() * 100.0)
        .collect()
}

/// True when there is at least one non-empty wedge to draw
pub fn has_spending(slices: &[ChartSlice]) -> bool {
    slices.iter().any(|s| s.value.is_positive())
}

/// Message shown instead of a chart when nothing has been spent yet
pub const NOTHING_TO_CHART: &str = "No expenses recorded yet. Nothing to chart.";

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(category: CategoryName, cents: i64) -> ChartSlice {
        ChartSlice {
            category,
            label: category.to_string(),
            value: Money::from_cents(cents),
            color: category.light_color(),
            over_budget: false,
        }
    }

    #[test]
    fn test_percentages() {
        let slices = vec![
            slice(CategoryName::Needs, 5000),
            slice(CategoryName::Wants, 3000),
            slice(CategoryName::Savings, 2000),
        ];
        let pct = slice_percentages(&slices);
        assert!((pct[0] - 50.0).abs() < 1e-9);
        assert!((pct[1] - 30.0).abs() < 1e-9);
        assert!((pct[2] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_without_spending() {
        let slices = vec![slice(CategoryName::Needs, 0), slice(CategoryName::Wants, 0)];
        assert_eq!(slice_percentages(&slices), vec![0.0, 0.0]);
        assert!(!has_spending(&slices));
    }
}
