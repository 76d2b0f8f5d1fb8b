//! UI Components
//!
//! Leptos components for the dashboard. Each fetches its own data.

pub mod bar_chart;
pub mod paginated_table;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use paginated_table::{AttendantsTable, ClientsTable};
pub use pie_chart::PieChart;
