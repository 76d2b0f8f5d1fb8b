//! Dashboard containers
//!
//! `Dashboard` stacks a [`TablesSection`] above a [`ChartsSection`]. Mounting
//! runs all four child fetches at the same time; each child owns its state so
//! they finish in any order.

use crate::charts::{BarChart, PieChart};
use crate::client::DataSource;
use crate::config::TablesConfig;
use crate::table::{PaginatedTable, TableKind};

/// Attendants and clients tables
#[derive(Debug, Clone)]
pub struct TablesSection {
    pub attendants: PaginatedTable,
    pub clients: PaginatedTable,
}

impl TablesSection {
    pub fn new(config: &TablesConfig) -> Self {
        Self {
            attendants: PaginatedTable::new(TableKind::Attendants, config.attendants_page_size),
            clients: PaginatedTable::new(TableKind::Clients, config.clients_page_size),
        }
    }

    pub async fn mount(&mut self, source: &dyn DataSource) {
        tokio::join!(self.attendants.mount(source), self.clients.mount(source));
    }
}

impl Default for TablesSection {
    fn default() -> Self {
        Self::new(&TablesConfig::default())
    }
}

/// Pie and bar charts
#[derive(Debug, Clone, Default)]
pub struct ChartsSection {
    pub pie: PieChart,
    pub bar: BarChart,
}

impl ChartsSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mount(&mut self, source: &dyn DataSource) {
        tokio::join!(self.pie.mount(source), self.bar.mount(source));
    }
}

/// Top-level container
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub tables: TablesSection,
    pub charts: ChartsSection,
}

impl Dashboard {
    pub fn new(config: &TablesConfig) -> Self {
        Self {
            tables: TablesSection::new(config),
            charts: ChartsSection::new(),
        }
    }

    /// Mount every child component concurrently
    pub async fn mount(&mut self, source: &dyn DataSource) {
        let started = std::time::Instant::now();
        tokio::join!(self.tables.mount(source), self.charts.mount(source));
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dashboard mounted"
        );
    }

    /// Components that ended up with something to render
    pub fn loaded_count(&self) -> usize {
        [
            self.tables.attendants.is_loaded(),
            self.tables.clients.is_loaded(),
            self.charts.pie.data().is_some(),
            self.charts.bar.data().is_some(),
        ]
        .iter()
        .filter(|loaded| **loaded)
        .count()
    }
}
