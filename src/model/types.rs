//! Core data types for the sentiment dashboard
//!
//! This module defines the shapes the backend hands us:
//! - `RankedEntry`: one attendant or client with a signed score
//! - `PagedCollection`: one page of ranked entries plus the overall total
//! - `PieSeries` and `BarSeries`: pre-aggregated chart data
//!
//! The backend speaks Portuguese on the wire (`nome`, `valores`, `meses`, ...);
//! the Rust side uses English field names and serde renames.

use serde::{Deserialize, Serialize};

/// A single attendant or client with its aggregate sentiment score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedEntry {
    /// Display name
    #[serde(rename = "nome")]
    pub name: String,
    /// Signed sentiment score computed upstream
    pub score: i64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// One page of a ranked collection
///
/// `items` holds at most one page worth of entries; `total` counts entries
/// across all pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagedCollection {
    pub items: Vec<RankedEntry>,
    pub total: u64,
}

impl PagedCollection {
    pub fn new(items: Vec<RankedEntry>, total: u64) -> Self {
        Self { items, total }
    }

    /// An empty collection (no entries anywhere)
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Check the page invariants against a page size
    ///
    /// `items.len() <= page_size` and `items.len() <= total`.
    pub fn is_consistent(&self, page_size: u64) -> bool {
        let len = self.items.len() as u64;
        len <= page_size && len <= self.total
    }
}

/// Sentiment distribution for the pie chart (values are percentages)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSeries {
    pub labels: Vec<String>,
    #[serde(rename = "valores")]
    pub values: Vec<f64>,
}

impl PieSeries {
    /// Label/value pairs; extra labels or values without a partner are dropped
    pub fn slices(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Sum of all values (close to 100 when the backend has data)
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Monthly sentiment evolution for the bar chart
///
/// `negative`, `positive` and `neutral` run parallel to `months`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarSeries {
    #[serde(rename = "meses")]
    pub months: Vec<String>,
    #[serde(rename = "negativo")]
    pub negative: Vec<f64>,
    #[serde(rename = "positivo")]
    pub positive: Vec<f64>,
    #[serde(rename = "neutro")]
    pub neutral: Vec<f64>,
}

impl BarSeries {
    /// Number of months that have a value in every series
    pub fn len(&self) -> usize {
        self.months
            .len()
            .min(self.negative.len())
            .min(self.positive.len())
            .min(self.neutral.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values for one sentiment group
    pub fn series(&self, group: SentimentGroup) -> &[f64] {
        match group {
            SentimentGroup::Negative => &self.negative,
            SentimentGroup::Positive => &self.positive,
            SentimentGroup::Neutral => &self.neutral,
        }
    }

    /// Largest value across all three series
    pub fn max_value(&self) -> Option<f64> {
        self.negative
            .iter()
            .chain(&self.positive)
            .chain(&self.neutral)
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }
}

/// The three sentiment groups plotted in the monthly evolution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentGroup {
    Negative,
    Positive,
    Neutral,
}

impl SentimentGroup {
    /// Plot order used by the bar chart
    pub fn all() -> &'static [SentimentGroup] {
        &[
            SentimentGroup::Negative,
            SentimentGroup::Positive,
            SentimentGroup::Neutral,
        ]
    }

    /// Legend label, as the backend names the groups
    pub fn label(&self) -> &'static str {
        match self {
            SentimentGroup::Negative => "Negativo",
            SentimentGroup::Positive => "Positivo",
            SentimentGroup::Neutral => "Neutro",
        }
    }
}

impl std::fmt::Display for SentimentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
