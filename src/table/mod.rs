//! Paginated Ranking Tables
//!
//! - **cursor**: page arithmetic (total pages, index range, button state)
//! - **tone**: score cell styling
//! - **component**: the table component with its loading/loaded state

mod component;
mod cursor;
mod tone;

pub use component::{
    PageRequest, PaginatedTable, PaginationView, RowView, TableKind, TableState, TableView,
};
pub use cursor::PageCursor;
pub use tone::{ScoreStyle, ScoreTone};
