//! Chart geometry
//!
//! Pure layout math for the canvas charts. Coordinates are relative to the
//! plot area; callers add their margins.

use std::f64::consts::PI;

/// Pie slice colours, cycled
pub const PIE_PALETTE: [&str; 5] = ["#6E7E8F", "#4DAFAC", "#54B399", "#E7664C", "#906ADA"];

/// Bar chart y-axis
pub const Y_MAX: f64 = 8.0;
pub const Y_STEP: f64 = 2.0;

/// Share of a month's slot covered by its bars
pub const BAR_PERCENTAGE: f64 = 0.8;

pub const GRID_COLOR: &str = "#f0f0f0";

pub fn pie_color(index: usize) -> &'static str {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}

/// Tooltip text for a slice
pub fn pie_tooltip(label: &str, value: f64) -> String {
    format!("{}: {}%", label, value)
}

/// (start, end) angle of each slice, clockwise from twelve o'clock
///
/// Empty when the values do not add up to anything positive.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * 2.0 * PI;
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Y-axis tick values, bottom to top
pub fn y_ticks() -> Vec<f64> {
    let steps = (Y_MAX / Y_STEP) as usize;
    (0..=steps).map(|i| i as f64 * Y_STEP).collect()
}

/// Height of a bar, values above the axis max are cut off
pub fn bar_height(value: f64, plot_height: f64) -> f64 {
    value.clamp(0.0, Y_MAX) / Y_MAX * plot_height
}

/// Horizontal placement of grouped bars
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub plot_width: f64,
    pub groups: usize,
    pub series: usize,
}

impl BarLayout {
    /// Width of one month's slot
    pub fn slot_width(&self) -> f64 {
        if self.groups == 0 {
            return 0.0;
        }
        self.plot_width / self.groups as f64
    }

    pub fn bar_width(&self) -> f64 {
        if self.series == 0 {
            return 0.0;
        }
        self.slot_width() * BAR_PERCENTAGE / self.series as f64
    }

    /// Left edge of bar `series` within slot `group`
    pub fn bar_x(&self, group: usize, series: usize) -> f64 {
        let slot = self.slot_width();
        let padding = slot * (1.0 - BAR_PERCENTAGE) / 2.0;
        slot * group as f64 + padding + self.bar_width() * series as f64
    }

    /// Centre of slot `group`, where its label goes
    pub fn slot_center(&self, group: usize) -> f64 {
        self.slot_width() * (group as f64 + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_cover_circle() {
        let slices = slice_angles(&[25.0, 25.0, 50.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].0, -PI / 2.0);
        assert!((slices[2].1 - 1.5 * PI).abs() < 1e-9);
        assert!((slices[2].1 - slices[2].0 - PI).abs() < 1e-9);
    }

    #[test]
    fn test_no_slices_without_data() {
        assert!(slice_angles(&[]).is_empty());
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_pie_colors_and_tooltip() {
        assert_eq!(pie_color(0), "#6E7E8F");
        assert_eq!(pie_color(6), "#4DAFAC");
        assert_eq!(pie_tooltip("Neutro", 26.7), "Neutro: 26.7%");
    }

    #[test]
    fn test_y_axis() {
        assert_eq!(y_ticks(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(bar_height(4.0, 200.0), 100.0);
        assert_eq!(bar_height(12.0, 200.0), 200.0);
        assert_eq!(bar_height(-1.0, 200.0), 0.0);
    }

    #[test]
    fn test_bar_layout() {
        let layout = BarLayout {
            plot_width: 1200.0,
            groups: 12,
            series: 3,
        };
        assert_eq!(layout.slot_width(), 100.0);
        assert!((layout.bar_width() - 80.0 / 3.0).abs() < 1e-9);
        assert!((layout.bar_x(0, 0) - 10.0).abs() < 1e-9);
        assert!((layout.bar_x(1, 0) - 110.0).abs() < 1e-9);
        assert_eq!(layout.slot_center(0), 50.0);
    }
}
