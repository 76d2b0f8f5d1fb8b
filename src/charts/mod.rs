//! Sentiment Charts
//!
//! Two charts, each fetched once on mount:
//! - **PieChart**: percentage distribution of client sentiments
//! - **BarChart**: monthly negative/positive/neutral counts

mod component;
mod options;

pub use component::{
    BarChart, BarChartView, BarDatasetView, Chart, PieChart, PieChartView, PieSliceView,
};
pub use options::{BarChartOptions, LegendPosition, PieChartOptions, PIE_PALETTE};
