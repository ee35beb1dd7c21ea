use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use budget_tracker::chart::{ChartRenderer, TerminalPieChart, TextChart};
use budget_tracker::cli::{parse_amount, run_interactive, Console};
use budget_tracker::config::{ChartMode, Settings};
use budget_tracker::export::CsvExporter;
use budget_tracker::models::Money;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "50/30/20 personal budget tracker",
    long_about = "Splits your monthly take-home salary into Needs (50%), Wants (30%) \
                  and Savings (20%), records expenses against each category and \
                  reports running balances, a pie chart and a CSV export."
)]
struct Cli {
    /// Monthly take-home salary (prompted for when omitted)
    #[arg(short, long, env = "BUDGET_SALARY", value_parser = parse_salary)]
    salary: Option<Money>,

    /// Directory CSV exports are written to
    #[arg(short = 'o', long, env = "BUDGET_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// How to show the spending chart
    #[arg(long, value_enum, env = "BUDGET_CHART")]
    chart: Option<ChartMode>,

    /// Currency symbol for terminal output
    #[arg(long, env = "BUDGET_CURRENCY")]
    currency: Option<String>,

    /// Append expenses and exports to this JSONL audit log
    #[arg(long, env = "BUDGET_AUDIT_LOG")]
    audit_log: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long, env = "BUDGET_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Settings file (if any) with command-line flags layered on top
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load_or_default(self.config.as_deref())
            .context("Failed to load settings")?;

        if let Some(dir) = &self.export_dir {
            settings.export_dir = dir.clone();
        }
        if let Some(chart) = self.chart {
            settings.chart = chart;
        }
        if let Some(symbol) = &self.currency {
            settings.currency_symbol = symbol.clone();
        }
        if let Some(path) = &self.audit_log {
            settings.audit_log = Some(path.clone());
        }

        Ok(settings)
    }
}

fn parse_salary(s: &str) -> Result<Money, String> {
    parse_amount(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    // The pie chart needs a real terminal; fall back to text bars otherwise
    let chart: Box<dyn ChartRenderer> = match settings.chart {
        ChartMode::Tui if io::stdout().is_terminal() => Box::new(TerminalPieChart::new()),
        _ => Box::new(TextChart::new(io::stdout())),
    };
    let exporter = Box::new(CsvExporter::new(settings.export_dir.clone()));

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());

    run_interactive(console, settings, cli.salary, chart, exporter)
        .context("Budget session failed")?;

    Ok(())
}
