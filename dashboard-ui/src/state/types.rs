//! Backend response shapes

use serde::Deserialize;

/// One attendant or client with its score
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RankedEntry {
    #[serde(rename = "nome")]
    pub name: String,
    pub score: i64,
}

/// One page of a ranking plus the overall total
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PagedCollection {
    pub items: Vec<RankedEntry>,
    pub total: u64,
}

/// Sentiment distribution in percent
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PieSeries {
    pub labels: Vec<String>,
    #[serde(rename = "valores")]
    pub values: Vec<f64>,
}

/// Monthly counts per sentiment group
#[derive(Clone, Debug, Deserialize, PartialEq)]
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
    /// (label, colour, values) in plot order
    pub fn datasets(&self) -> [(&'static str, &'static str, &[f64]); 3] {
        [
            ("Negativo", "#E7664C", self.negative.as_slice()),
            ("Positivo", "#54B399", self.positive.as_slice()),
            ("Neutro", "#BBBBBB", self.neutral.as_slice()),
        ]
    }
}
