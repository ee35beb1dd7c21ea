//! Full-screen pie chart
//!
//! Draws the spending breakdown on a ratatui canvas in the alternate screen
//! and waits for a key press before handing the terminal back to the menu.

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Paragraph, Wrap,
    },
    Frame, Terminal,
};
use std::io::{self, Stdout};

use super::{has_spending, slice_percentages, ChartRenderer, ChartSlice};
use crate::display::report::format_percentage;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Rgb;

/// Distance between sampled points inside the unit disc
const GRID_STEP: f64 = 0.015;

/// Wedges start at twelve o'clock and run counter-clockwise
const START_ANGLE: f64 = 90.0;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Renders the chart in the alternate screen; any key closes it
#[derive(Debug, Default)]
pub struct TerminalPieChart;

impl TerminalPieChart {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for TerminalPieChart {
    fn render(&mut self, title: &str, slices: &[ChartSlice]) -> TrackerResult<()> {
        // The caller reports an empty chart; there is nothing to draw
        if !has_spending(slices) {
            return Ok(());
        }

        let mut terminal = init_terminal().map_err(chart_error)?;
        let result = show_until_key(&mut terminal, title, slices);
        restore_terminal().map_err(chart_error)?;
        result
    }
}

fn chart_error(err: io::Error) -> TrackerError {
    TrackerError::Chart(err.to_string())
}

/// Enter raw mode and the alternate screen, undoing both if setup fails
fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        let _ = restore_terminal();
    })
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn show_until_key(terminal: &mut Tui, title: &str, slices: &[ChartSlice]) -> TrackerResult<()> {
    let percentages = slice_percentages(slices);
    let wedges = wedge_points(&percentages);

    loop {
        terminal
            .draw(|frame| draw(frame, title, slices, &percentages, &wedges))
            .map_err(chart_error)?;

        // Resize and other events just trigger a redraw
        if let Event::Key(key) = event::read().map_err(chart_error)? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Lay out the pie on the left and the legend on the right
fn draw(
    frame: &mut Frame<'_>,
    title: &str,
    slices: &[ChartSlice],
    percentages: &[f64],
    wedges: &[Vec<(f64, f64)>],
) {
    let outer = Block::bordered()
        .title(Line::from(format!(" {} ", title)).centered())
        .title_bottom(Line::from(" press any key to return ").centered());
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [pie_area, legend_area] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(inner);

    let (x_bound, y_bound) = canvas_bounds(pie_area);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_bound, x_bound])
        .y_bounds([-y_bound, y_bound])
        .paint(|ctx| {
            for (slice, coords) in slices.iter().zip(wedges) {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: to_color(slice.color),
                });
            }
        });
    frame.render_widget(canvas, pie_area);

    let legend: Vec<Line> = slices
        .iter()
        .zip(percentages)
        .map(|(slice, pct)| legend_line(slice, *pct))
        .collect();
    frame.render_widget(
        Paragraph::new(legend)
            .block(Block::bordered().title(" Legend "))
            .wrap(Wrap { trim: true }),
        legend_area,
    );
}

fn legend_line(slice: &ChartSlice, pct: f64) -> Line<'static> {
    let mut spans = vec![
        Span::styled("██ ", Style::default().fg(to_color(slice.color))),
        Span::raw(slice.label.clone()),
        Span::raw(format!("  {}", format_percentage(pct))),
    ];
    if slice.over_budget {
        spans.push(Span::styled(
            "  Over Budget!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Canvas bounds that keep the pie round.
///
/// Braille dots are square when a cell is twice as tall as it is wide, so the
/// area's width-to-height ratio in dots is `width / (2 * height)`.
fn canvas_bounds(area: Rect) -> (f64, f64) {
    const MARGIN: f64 = 1.1;
    if area.width == 0 || area.height == 0 {
        return (MARGIN, MARGIN);
    }
    let aspect = f64::from(area.width) / (2.0 * f64::from(area.height));
    if aspect >= 1.0 {
        (MARGIN * aspect, MARGIN)
    } else {
        (MARGIN, MARGIN / aspect)
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Sample the unit disc and bucket each point into the wedge covering its angle
fn wedge_points(percentages: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut buckets = vec![Vec::new(); percentages.len()];

    let mut bounds: Vec<f64> = percentages
        .iter()
        .scan(0.0, |acc, pct| {
            *acc += pct * 3.6;
            Some(*acc)
        })
        .collect();
    // Rounding can leave the last wedge a hair short of 360 degrees
    if let Some(last) = percentages.iter().rposition(|p| *p > 0.0) {
        bounds[last] = f64::MAX;
    }

    let steps = (2.0 / GRID_STEP).round() as i32;
    for i in 0..=steps {
        for j in 0..=steps {
            let x = -1.0 + f64::from(i) * GRID_STEP;
            let y = -1.0 + f64::from(j) * GRID_STEP;
            if x * x + y * y > 1.0 {
                continue;
            }
            let angle = (y.atan2(x).to_degrees() - START_ANGLE).rem_euclid(360.0);
            if let Some(idx) = bounds.iter().position(|b| angle < *b) {
                buckets[idx].push((x, y));
            }
        }
    }

    buckets
}
