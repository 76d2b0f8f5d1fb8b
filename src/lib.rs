//! # Sentiment Dashboard
//!
//! Client side of a customer-service sentiment analysis system. Scores and
//! aggregates are computed by a REST backend; this crate fetches them and
//! presents paginated rankings and two charts.
//!
//! ## Modules
//!
//! - [`client`]: fetch helper and the [`DataSource`] seam
//! - [`table`]: paginated ranking tables (attendants, clients)
//! - [`charts`]: pie (sentiment distribution) and bar (monthly evolution)
//! - [`dashboard`]: section containers mounting the components
//! - [`view`]: terminal rendering
//! - [`mock`]: fixture-backed stand-in for the backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentiment_dashboard::{Config, Dashboard, HttpClient};
//! use sentiment_dashboard::view::{render_dashboard, TextRenderer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!     let client = HttpClient::new(&config.backend)?;
//!
//!     let mut dashboard = Dashboard::new(&config.tables);
//!     dashboard.mount(&client).await;
//!
//!     print!("{}", render_dashboard(&dashboard, &TextRenderer::new(true)));
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod mock;
pub mod model;
pub mod table;
pub mod view;

pub use model::{BarSeries, PagedCollection, PieSeries, RankedEntry, SentimentGroup};

pub use client::{fetch_data, try_fetch, DataSource, Endpoint, FetchError, HttpClient};

pub use table::{PageCursor, PaginatedTable, ScoreTone, TableKind, TableState};

pub use charts::{BarChart, BarChartOptions, PieChart, PieChartOptions};

pub use dashboard::{ChartsSection, Dashboard, TablesSection};

pub use config::{Config, ConfigError};

pub use mock::{build_router, serve, Fixtures, MockApiError, MockState};
