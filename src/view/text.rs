//! Plain-text rendering for the terminal front-end

use std::fmt::Write;

use crate::charts::{BarChartView, PieChartView};
use crate::table::{ScoreTone, TableView};

/// Width of the name column
const NAME_WIDTH: usize = 28;

/// Characters per y-axis unit in the bar chart
const BAR_CELLS_PER_UNIT: f64 = 3.0;

/// Text renderer; `ansi` turns on colour escapes
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub ansi: bool,
}

impl TextRenderer {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn paint(&self, text: &str, tone: ScoreTone) -> String {
        match (self.ansi, tone.ansi_code()) {
            (true, Some(code)) => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }

    /// Loaded table: heading, one line per row, pagination footer
    pub fn table(&self, view: &TableView) -> String {
        let mut out = String::new();
        let rule = "-".repeat(NAME_WIDTH + 20);

        let _ = writeln!(
            out,
            "{:<width$} {:>19}",
            view.name_heading,
            view.score_heading,
            width = NAME_WIDTH
        );
        let _ = writeln!(out, "{}", rule);

        for row in &view.rows {
            let score = format!("{:>19}", row.score);
            let _ = writeln!(
                out,
                "{:<width$} {}",
                row.label(),
                self.paint(&score, row.tone),
                width = NAME_WIDTH
            );
        }

        let _ = writeln!(out, "{}", rule);
        let prev = if view.pagination.prev_disabled { "   " } else { "[<]" };
        let next = if view.pagination.next_disabled { "   " } else { "[>]" };
        let _ = writeln!(out, "{}  {}  {}", prev, view.pagination.label, next);
        out
    }

    /// Pie chart as a legend with proportional bars
    pub fn pie(&self, view: &PieChartView) -> String {
        let mut out = String::new();
        let label_width = view
            .slices
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);

        for slice in &view.slices {
            let cells = (slice.value.clamp(0.0, 100.0) / 2.0).round() as usize;
            let padding = label_width.saturating_sub(slice.label.chars().count());
            let _ = writeln!(
                out,
                "{}{} {:>6.1}% {}",
                slice.label,
                " ".repeat(padding),
                slice.value,
                "#".repeat(cells)
            );
        }
        out
    }

    /// Bar chart as grouped horizontal bars per month, capped at the y-axis max
    pub fn bar(&self, view: &BarChartView) -> String {
        let mut out = String::new();
        let month_width = view
            .months
            .iter()
            .map(|m| m.chars().count())
            .max()
            .unwrap_or(0);
        let group_width = view
            .datasets
            .iter()
            .map(|d| d.label.len())
            .max()
            .unwrap_or(0);

        for (index, month) in view.months.iter().enumerate() {
            for (n, dataset) in view.datasets.iter().enumerate() {
                let value = dataset.values.get(index).copied().unwrap_or(0.0);
                let clipped = value.clamp(0.0, view.y_max);
                let cells = (clipped * BAR_CELLS_PER_UNIT).round() as usize;
                let overflow = if value > view.y_max { ">" } else { "" };

                let name = if n == 0 { month.as_str() } else { "" };
                let padding = month_width.saturating_sub(name.chars().count());
                let _ = writeln!(
                    out,
                    "{}{} {:<gw$} {}{} {}",
                    name,
                    " ".repeat(padding),
                    dataset.label,
                    "=".repeat(cells),
                    overflow,
                    value,
                    gw = group_width
                );
            }
        }

        let ticks: Vec<String> = view.y_ticks.iter().map(|t| t.to_string()).collect();
        let _ = writeln!(out, "y: {}", ticks.join(" "));
        let legend: Vec<&str> = view.datasets.iter().map(|d| d.label).collect();
        let _ = writeln!(out, "{}", legend.join("  "));
        out
    }
}
