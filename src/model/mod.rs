//! Dashboard data model
//!
//! Plain data shapes exchanged with the sentiment backend. Everything here is
//! created when a component mounts or changes page, and replaced wholesale on
//! the next successful fetch.

mod types;

pub use types::{BarSeries, PagedCollection, PieSeries, RankedEntry, SentimentGroup};
