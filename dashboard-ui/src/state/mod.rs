//! State Management
//!
//! Wire types from the backend plus the pure logic the components run on.

pub mod chart_layout;
pub mod pagination;
pub mod types;

pub use pagination::{PageCursor, TableKind};
pub use types::{BarSeries, PagedCollection, PieSeries};
