//! Chart components
//!
//! A chart fetches its series once when mounted and renders nothing until the
//! data arrives. There is no refetch trigger and no error state.

use serde::de::DeserializeOwned;

use crate::client::{fetch_data, DataSource, Endpoint};
use crate::model::{BarSeries, PieSeries, SentimentGroup};

use super::options::{BarChartOptions, LegendPosition, PieChartOptions};

/// A chart bound to one backend endpoint
#[derive(Debug, Clone)]
pub struct Chart<S> {
    endpoint: Endpoint,
    mounted: bool,
    data: Option<S>,
}

/// Sentiment distribution (`performance-geral`)
pub type PieChart = Chart<PieSeries>;

/// Monthly sentiment evolution (`evolucao-mensal`)
pub type BarChart = Chart<BarSeries>;

impl<S: DeserializeOwned> Chart<S> {
    pub fn with_endpoint(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            mounted: false,
            data: None,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Fetch the series. Only the first call does anything.
    pub async fn mount(&mut self, source: &dyn DataSource) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.data = fetch_data(source, self.endpoint.path()).await;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn data(&self) -> Option<&S> {
        self.data.as_ref()
    }
}

impl PieChart {
    pub fn new() -> Self {
        Self::with_endpoint(Endpoint::Performance)
    }

    /// Render model; `None` until data has arrived
    pub fn view(&self) -> Option<PieChartView> {
        let series = self.data.as_ref()?;
        let options = PieChartOptions::default();

        let slices = series
            .slices()
            .enumerate()
            .map(|(index, (label, value))| PieSliceView {
                label: label.to_string(),
                value,
                color: options.color(index),
                tooltip: options.tooltip(label, value),
            })
            .collect();

        Some(PieChartView {
            legend: options.legend,
            slices,
        })
    }
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    pub fn new() -> Self {
        Self::with_endpoint(Endpoint::MonthlyEvolution)
    }

    /// Render model; `None` until data has arrived
    pub fn view(&self) -> Option<BarChartView> {
        let series = self.data.as_ref()?;
        let options = BarChartOptions::default();
        let len = series.len();

        let datasets = SentimentGroup::all()
            .iter()
            .map(|group| BarDatasetView {
                label: group.label(),
                color: options.color(*group),
                values: series.series(*group)[..len].to_vec(),
            })
            .collect();

        Some(BarChartView {
            legend: options.legend,
            months: series.months[..len].to_vec(),
            datasets,
            y_ticks: options.y_ticks(),
            y_max: options.y_max,
        })
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to draw the pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartView {
    pub legend: LegendPosition,
    pub slices: Vec<PieSliceView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSliceView {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    pub tooltip: String,
}

/// Everything needed to draw the bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartView {
    pub legend: LegendPosition,
    pub months: Vec<String>,
    pub datasets: Vec<BarDatasetView>,
    pub y_ticks: Vec<f64>,
    pub y_max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatasetView {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}
