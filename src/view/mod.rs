//! Terminal rendering of the dashboard components
//!
//! Components that have nothing to show (still loading, or their fetch
//! failed) render as an empty string, the same way the browser dashboard
//! leaves them out.

mod text;

pub use text::TextRenderer;

use crate::charts::{BarChart, PieChart};
use crate::dashboard::{ChartsSection, Dashboard, TablesSection};
use crate::table::PaginatedTable;

pub fn render_table(table: &PaginatedTable, renderer: &TextRenderer) -> String {
    table
        .view()
        .map(|view| renderer.table(&view))
        .unwrap_or_default()
}

pub fn render_pie(chart: &PieChart, renderer: &TextRenderer) -> String {
    chart
        .view()
        .map(|view| renderer.pie(&view))
        .unwrap_or_default()
}

pub fn render_bar(chart: &BarChart, renderer: &TextRenderer) -> String {
    chart
        .view()
        .map(|view| renderer.bar(&view))
        .unwrap_or_default()
}

pub fn render_tables(section: &TablesSection, renderer: &TextRenderer) -> String {
    join_blocks([
        render_table(&section.attendants, renderer),
        render_table(&section.clients, renderer),
    ])
}

pub fn render_charts(section: &ChartsSection, renderer: &TextRenderer) -> String {
    join_blocks([
        render_pie(&section.pie, renderer),
        render_bar(&section.bar, renderer),
    ])
}

/// Tables above charts
pub fn render_dashboard(dashboard: &Dashboard, renderer: &TextRenderer) -> String {
    join_blocks([
        render_tables(&dashboard.tables, renderer),
        render_charts(&dashboard.charts, renderer),
    ])
}

/// Blank line between non-empty blocks
fn join_blocks<const N: usize>(blocks: [String; N]) -> String {
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PagedCollection, RankedEntry};

    #[test]
    fn test_unloaded_dashboard_renders_nothing() {
        let dashboard = Dashboard::default();
        assert_eq!(render_dashboard(&dashboard, &TextRenderer::default()), "");
    }

    #[test]
    fn test_only_loaded_components_render() {
        let mut dashboard = Dashboard::default();
        let request = dashboard.tables.clients.request_current_page();
        dashboard.tables.clients.apply(
            request.seq,
            Some(PagedCollection::new(vec![RankedEntry::new("Luz", 10)], 1)),
        );

        let text = render_dashboard(&dashboard, &TextRenderer::default());
        assert!(text.starts_with("Nome do Cliente"));
        assert!(!text.contains("Nome do Atendente"));
        assert!(text.contains("1. Luz"));
    }
}
