//! Chart renderer options
//!
//! Cosmetic settings handed to whatever draws the charts. They carry no logic
//! beyond deriving axis ticks.

use crate::model::SentimentGroup;

/// Where a chart legend sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Right,
    Bottom,
}

/// Pie chart options
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartOptions {
    pub legend: LegendPosition,
    pub legend_box_width: u32,
    pub legend_font_size: u32,
    /// Appended to each tooltip value
    pub tooltip_suffix: &'static str,
    /// Slice colours, cycled when there are more slices than colours
    pub palette: &'static [&'static str],
}

pub const PIE_PALETTE: [&str; 5] = ["#6E7E8F", "#4DAFAC", "#54B399", "#E7664C", "#906ADA"];

impl Default for PieChartOptions {
    fn default() -> Self {
        Self {
            legend: LegendPosition::Right,
            legend_box_width: 10,
            legend_font_size: 11,
            tooltip_suffix: "%",
            palette: &PIE_PALETTE,
        }
    }
}

impl PieChartOptions {
    pub fn color(&self, index: usize) -> &'static str {
        self.palette[index % self.palette.len()]
    }

    /// "Satisfação: 32.5%"
    pub fn tooltip(&self, label: &str, value: f64) -> String {
        format!("{}: {}{}", label, value, self.tooltip_suffix)
    }
}

/// Bar chart options
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartOptions {
    pub legend: LegendPosition,
    pub y_max: f64,
    pub y_step: f64,
    pub begin_at_zero: bool,
    pub stacked: bool,
    pub bar_percentage: f64,
    pub grid_color: &'static str,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            legend: LegendPosition::Bottom,
            y_max: 8.0,
            y_step: 2.0,
            begin_at_zero: true,
            stacked: false,
            bar_percentage: 0.8,
            grid_color: "#f0f0f0",
        }
    }
}

impl BarChartOptions {
    /// Fixed series colour per sentiment group
    pub fn color(&self, group: SentimentGroup) -> &'static str {
        match group {
            SentimentGroup::Negative => "#E7664C",
            SentimentGroup::Positive => "#54B399",
            SentimentGroup::Neutral => "#BBBBBB",
        }
    }

    /// Y-axis tick values from zero up to and including `y_max`
    pub fn y_ticks(&self) -> Vec<f64> {
        if self.y_step <= 0.0 {
            return vec![0.0, self.y_max];
        }
        let steps = (self.y_max / self.y_step).floor() as usize;
        (0..=steps).map(|i| i as f64 * self.y_step).collect()
    }
}
