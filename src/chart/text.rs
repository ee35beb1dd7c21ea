//! Plain-text chart renderer
//!
//! Prints one bar per category, sized by its share of total spending.

use std::io::Write;

use super::{has_spending, slice_percentages, ChartRenderer, ChartSlice, NOTHING_TO_CHART};
use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::TrackerResult;

const BAR_WIDTH: usize = 30;

/// Draws the spending breakdown as text bars on any writer
pub struct TextChart<W: Write> {
    out: W,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TextChart<W> {
    fn render(&mut self, title: &str, slices: &[ChartSlice]) -> TrackerResult<()> {
        if !has_spending(slices) {
            writeln!(self.out, "\n{}", NOTHING_TO_CHART)?;
            return Ok(());
        }

        writeln!(self.out, "\n{}", title)?;
        writeln!(self.out, "{}", separator(title.chars().count()))?;

        let label_width = slices
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);

        for (slice, pct) in slices.iter().zip(slice_percentages(slices)) {
            let marker = if slice.over_budget { " ⚠" } else { "" };
            writeln!(
                self.out,
                "{:<width$}  {} {:>6} {}{}",
                slice.label,
                format_bar(pct, 100.0, BAR_WIDTH),
                format_percentage(pct),
                slice.color.hex(),
                marker,
                width = label_width
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryName, Money};

    fn render(slices: &[ChartSlice]) -> String {
        let mut chart = TextChart::new(Vec::new());
        chart.render("Title", slices).unwrap();
        String::from_utf8(chart.into_inner()).unwrap()
    }

    #[test]
    fn test_renders_one_line_per_slice() {
        let slices = vec![
            ChartSlice {
                category: CategoryName::Needs,
                label: "Needs (600/500)".into(),
                value: Money::from_cents(60000),
                color: CategoryName::Needs.dark_color(),
                over_budget: true,
            },
            ChartSlice {
                category: CategoryName::Wants,
                label: "Wants (0/300)".into(),
                value: Money::zero(),
                color: CategoryName::Wants.light_color(),
                over_budget: false,
            },
        ];

        let output = render(&slices);
        assert!(output.contains("Title"));
        assert!(output.contains("Needs (600/500)"));
        assert!(output.contains("100%"));
        assert!(output.contains("#FF4C4C ⚠"));
        assert!(output.contains("Wants (0/300)"));
    }

    #[test]
    fn test_nothing_to_chart() {
        let slices = vec![ChartSlice {
            category: CategoryName::Savings,
            label: "Savings (0/200)".into(),
            value: Money::zero(),
            color: CategoryName::Savings.light_color(),
            over_budget: false,
        }];
        assert!(render(&slices).contains(NOTHING_TO_CHART));
    }
}
