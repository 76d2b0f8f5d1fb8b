//! Paginated ranking table
//!
//! One instance per ranked collection (attendants, clients). The table owns its
//! cursor and the last page it received; nothing is shared with other
//! components.
//!
//! Fetching is split in two steps so callers can run requests however they
//! like: a navigation handler returns a [`PageRequest`], and the response is
//! handed back through [`PaginatedTable::apply`]. Each request carries a
//! sequence number and only the latest one issued is accepted, so a slow
//! response for an old page never overwrites a newer one.

use crate::client::{fetch_data, DataSource, Endpoint};
use crate::model::{PagedCollection, RankedEntry};

use super::cursor::PageCursor;
use super::tone::{ScoreStyle, ScoreTone};

/// Which ranking a table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Attendants,
    Clients,
}

impl TableKind {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            TableKind::Attendants => Endpoint::Attendants,
            TableKind::Clients => Endpoint::Clients,
        }
    }

    pub fn default_page_size(&self) -> u64 {
        match self {
            TableKind::Attendants => 8,
            TableKind::Clients => 10,
        }
    }

    pub fn score_style(&self) -> ScoreStyle {
        match self {
            TableKind::Attendants => ScoreStyle::Signed,
            TableKind::Clients => ScoreStyle::Uniform,
        }
    }

    /// Column headings (name, score)
    pub fn headings(&self) -> (&'static str, &'static str) {
        match self {
            TableKind::Attendants => ("Nome do Atendente", "Score do Atendente"),
            TableKind::Clients => ("Nome do Cliente", "Score do Cliente"),
        }
    }
}

/// What the table currently has to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState {
    /// Nothing received yet; renders nothing
    Loading,
    /// Last page accepted from the backend
    Loaded(PagedCollection),
}

/// A fetch the table wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub page: u64,
    pub endpoint: String,
}

/// Paginated ranking table component
#[derive(Debug, Clone)]
pub struct PaginatedTable {
    kind: TableKind,
    cursor: PageCursor,
    state: TableState,
    latest_seq: u64,
    last_fetch_failed: bool,
}

impl PaginatedTable {
    pub fn new(kind: TableKind, page_size: u64) -> Self {
        Self {
            kind,
            cursor: PageCursor::new(page_size),
            state: TableState::Loading,
            latest_seq: 0,
            last_fetch_failed: false,
        }
    }

    /// Attendants table with its default page size
    pub fn attendants() -> Self {
        Self::new(TableKind::Attendants, TableKind::Attendants.default_page_size())
    }

    /// Clients table with its default page size
    pub fn clients() -> Self {
        Self::new(TableKind::Clients, TableKind::Clients.default_page_size())
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn current_page(&self) -> u64 {
        self.cursor.current_page()
    }

    pub fn page_size(&self) -> u64 {
        self.cursor.page_size()
    }

    /// Total across all pages, zero until something is loaded
    pub fn total(&self) -> u64 {
        match &self.state {
            TableState::Loaded(page) => page.total,
            TableState::Loading => 0,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.cursor.total_pages(self.total())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, TableState::Loaded(_))
    }

    /// Whether the most recent accepted response was a failure
    pub fn last_fetch_failed(&self) -> bool {
        self.last_fetch_failed
    }

    pub fn prev_disabled(&self) -> bool {
        !self.cursor.can_go_prev()
    }

    pub fn next_disabled(&self) -> bool {
        !self.cursor.can_go_next(self.total())
    }

    /// Request for the current page (mount, or an external retry)
    pub fn request_current_page(&mut self) -> PageRequest {
        self.latest_seq += 1;
        let page = self.cursor.current_page();
        PageRequest {
            seq: self.latest_seq,
            page,
            endpoint: self.kind.endpoint().page(page, self.cursor.page_size()),
        }
    }

    /// Go back one page; `None` when already on page 1
    pub fn handle_prev_page(&mut self) -> Option<PageRequest> {
        if !self.cursor.prev() {
            return None;
        }
        Some(self.request_current_page())
    }

    /// Go forward one page; `None` when already on the last page
    pub fn handle_next_page(&mut self) -> Option<PageRequest> {
        let total = self.total();
        if !self.cursor.next(total) {
            return None;
        }
        Some(self.request_current_page())
    }

    /// Re-issue the request for the current page
    pub fn retry(&mut self) -> PageRequest {
        self.request_current_page()
    }

    /// Hand a response back. Returns true when it was accepted.
    ///
    /// Responses for anything but the latest request are dropped. A failed
    /// fetch (`None`) keeps whatever was shown before.
    pub fn apply(&mut self, seq: u64, response: Option<PagedCollection>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(
                table = ?self.kind,
                seq,
                latest = self.latest_seq,
                "Discarding stale page response"
            );
            return false;
        }

        match response {
            Some(page) => {
                if !page.is_consistent(self.cursor.page_size()) {
                    tracing::warn!(
                        table = ?self.kind,
                        items = page.items.len(),
                        total = page.total,
                        page_size = self.cursor.page_size(),
                        "Backend page does not fit the requested page size"
                    );
                }
                self.state = TableState::Loaded(page);
                self.last_fetch_failed = false;
            }
            None => {
                self.last_fetch_failed = true;
            }
        }
        true
    }

    /// Perform `request` against `source` and apply the result
    pub async fn run(&mut self, request: PageRequest, source: &dyn DataSource) -> bool {
        let response = fetch_data::<PagedCollection>(source, &request.endpoint).await;
        self.apply(request.seq, response)
    }

    /// Fetch the current page
    pub async fn mount(&mut self, source: &dyn DataSource) {
        let request = self.request_current_page();
        self.run(request, source).await;
    }

    /// Previous page, fetched. Returns false when the button is disabled.
    pub async fn prev_page(&mut self, source: &dyn DataSource) -> bool {
        match self.handle_prev_page() {
            Some(request) => {
                self.run(request, source).await;
                true
            }
            None => false,
        }
    }

    /// Next page, fetched. Returns false when the button is disabled.
    pub async fn next_page(&mut self, source: &dyn DataSource) -> bool {
        match self.handle_next_page() {
            Some(request) => {
                self.run(request, source).await;
                true
            }
            None => false,
        }
    }

    /// Render model; `None` while loading
    pub fn view(&self) -> Option<TableView> {
        let page = match &self.state {
            TableState::Loading => return None,
            TableState::Loaded(page) => page,
        };

        let style = self.kind.score_style();
        let rows = page
            .items
            .iter()
            .enumerate()
            .map(|(index, entry)| RowView::new(index + 1, entry, style))
            .collect();

        let (name_heading, score_heading) = self.kind.headings();

        Some(TableView {
            name_heading,
            score_heading,
            rows,
            pagination: PaginationView {
                label: self.cursor.range_label(page.total),
                current_page: self.cursor.current_page(),
                total_pages: self.cursor.total_pages(page.total),
                prev_disabled: self.prev_disabled(),
                next_disabled: self.next_disabled(),
            },
        })
    }
}

/// Everything needed to draw a loaded table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub name_heading: &'static str,
    pub score_heading: &'static str,
    pub rows: Vec<RowView>,
    pub pagination: PaginationView,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// 1-based position within the page
    pub position: usize,
    pub name: String,
    pub score: i64,
    pub tone: ScoreTone,
}

impl RowView {
    fn new(position: usize, entry: &RankedEntry, style: ScoreStyle) -> Self {
        Self {
            position,
            name: entry.name.clone(),
            score: entry.score,
            tone: style.tone(entry.score),
        }
    }

    /// "1. Ana"
    pub fn label(&self) -> String {
        format!("{}. {}", self.position, self.name)
    }
}

/// Pagination footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub current_page: u64,
    pub total_pages: u64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemorySource;
    use serde_json::json;

    fn page_of(names: &[(&str, i64)], total: u64) -> PagedCollection {
        PagedCollection::new(
            names
                .iter()
                .map(|(name, score)| RankedEntry::new(*name, *score))
                .collect(),
            total,
        )
    }

    fn loaded(kind: TableKind, page_size: u64, total: u64) -> PaginatedTable {
        let mut table = PaginatedTable::new(kind, page_size);
        let request = table.request_current_page();
        table.apply(request.seq, Some(PagedCollection::new(Vec::new(), total)));
        table
    }

    #[test]
    fn test_mount_requests_first_page() {
        let mut attendants = PaginatedTable::attendants();
        let request = attendants.request_current_page();
        assert_eq!(request.page, 1);
        assert_eq!(request.endpoint, "atendentes?page=1&limit=8");

        let mut clients = PaginatedTable::clients();
        assert_eq!(clients.request_current_page().endpoint, "clientes?page=1&limit=10");
    }

    #[test]
    fn test_loading_renders_nothing() {
        let table = PaginatedTable::attendants();
        assert!(table.view().is_none());
        assert!(!table.is_loaded());
        assert_eq!(table.total_pages(), 0);
        assert!(table.prev_disabled());
        assert!(table.next_disabled());
    }

    #[test]
    fn test_single_attendant_scenario() {
        let mut table = PaginatedTable::attendants();
        let request = table.request_current_page();
        assert!(table.apply(request.seq, Some(page_of(&[("Ana", 9)], 1))));

        let view = table.view().unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].label(), "1. Ana");
        assert_eq!(view.rows[0].score.to_string(), "9");
        assert_eq!(view.rows[0].tone, ScoreTone::Positive);
        assert_eq!(view.pagination.label, "1 - 1 / 1");
        assert!(view.pagination.prev_disabled);
        assert!(view.pagination.next_disabled);
    }

    #[test]
    fn test_empty_total_disables_buttons() {
        let table = loaded(TableKind::Clients, 10, 0);
        let view = table.view().unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.pagination.total_pages, 0);
        assert!(view.pagination.prev_disabled);
        assert!(view.pagination.next_disabled);
    }

    #[test]
    fn test_next_from_page_two_of_five() {
        let mut table = loaded(TableKind::Attendants, 8, 40);
        table.handle_next_page().unwrap();
        assert_eq!(table.current_page(), 2);
        assert_eq!(table.total_pages(), 5);

        let request = table.handle_next_page().unwrap();
        assert_eq!(table.current_page(), 3);
        assert_eq!(request.page, 3);
        assert_eq!(request.endpoint, "atendentes?page=3&limit=8");

        let rows = [("Gabriela", 24), ("Felipe", 0), ("Carla", -8)];
        assert!(table.apply(request.seq, Some(page_of(&rows, 40))));
        let view = table.view().unwrap();
        assert_eq!(view.rows[0].label(), "1. Gabriela");
        assert_eq!(view.rows[1].tone, ScoreTone::Neutral);
        assert_eq!(view.rows[2].tone, ScoreTone::Negative);
        assert_eq!(view.pagination.label, "17 - 24 / 40");
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut table = loaded(TableKind::Attendants, 8, 40);
        assert!(table.handle_prev_page().is_none());
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_next_on_last_page_is_noop() {
        let mut table = loaded(TableKind::Clients, 10, 15);
        assert!(table.handle_next_page().is_some());
        assert!(table.handle_next_page().is_none());
        assert_eq!(table.current_page(), 2);
        assert!(table.next_disabled());
        assert!(!table.prev_disabled());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut table = loaded(TableKind::Attendants, 8, 40);

        let page2 = table.handle_next_page().unwrap();
        let page3 = table.handle_next_page().unwrap();

        // Page 3 arrives first, then the slow page 2 response
        assert!(table.apply(page3.seq, Some(page_of(&[("Carla", -8)], 40))));
        assert!(!table.apply(page2.seq, Some(page_of(&[("Henrique", 32)], 40))));

        let view = table.view().unwrap();
        assert_eq!(view.rows[0].name, "Carla");
        assert_eq!(table.current_page(), 3);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut table = PaginatedTable::attendants();
        let first = table.request_current_page();
        table.apply(first.seq, Some(page_of(&[("Ana", 9)], 20)));

        let next = table.handle_next_page().unwrap();
        assert!(table.apply(next.seq, None));
        assert!(table.last_fetch_failed());
        assert_eq!(table.view().unwrap().rows[0].name, "Ana");

        let retry = table.retry();
        assert_eq!(retry.page, 2);
        table.apply(retry.seq, Some(page_of(&[("Bruno", -19)], 20)));
        assert!(!table.last_fetch_failed());
        assert_eq!(table.view().unwrap().rows[0].name, "Bruno");
    }

    #[test]
    fn test_failed_mount_stays_loading() {
        let mut table = PaginatedTable::clients();
        let request = table.request_current_page();
        table.apply(request.seq, None);
        assert!(table.view().is_none());
        assert!(table.last_fetch_failed());
    }

    #[test]
    fn test_clients_scores_are_uniform() {
        let mut table = PaginatedTable::clients();
        let request = table.request_current_page();
        table.apply(request.seq, Some(page_of(&[("Felipe", 20), ("Luz", -3), ("Jorge", 0)], 3)));

        let view = table.view().unwrap();
        assert!(view.rows.iter().all(|row| row.tone == ScoreTone::Plain));
        assert_eq!(view.name_heading, "Nome do Cliente");
    }

    #[tokio::test]
    async fn test_mount_and_next_against_source() {
        let source = MemorySource::new()
            .with_json(
                "clientes?page=1&limit=10",
                json!({"items": [{"nome": "Felipe", "score": 20}], "total": 11}),
            )
            .with_json(
                "clientes?page=2&limit=10",
                json!({"items": [{"nome": "Carolina", "score": 10}], "total": 11}),
            );

        let mut table = PaginatedTable::clients();
        table.mount(&source).await;
        assert_eq!(table.view().unwrap().rows[0].name, "Felipe");

        assert!(table.next_page(&source).await);
        assert_eq!(table.view().unwrap().rows[0].name, "Carolina");
        assert_eq!(table.view().unwrap().pagination.label, "11 - 11 / 11");

        assert!(!table.next_page(&source).await);
        assert!(table.prev_page(&source).await);
        assert_eq!(table.current_page(), 1);

        assert_eq!(
            source.requests(),
            vec![
                "clientes?page=1&limit=10",
                "clientes?page=2&limit=10",
                "clientes?page=1&limit=10",
            ]
        );
    }
}
