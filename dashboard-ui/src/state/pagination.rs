//! Table pagination logic
//!
//! Kept free of Leptos so it runs under plain `cargo test`.

/// Which ranking a table shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    Attendants,
    Clients,
}

impl TableKind {
    pub fn page_size(&self) -> u64 {
        match self {
            TableKind::Attendants => 8,
            TableKind::Clients => 10,
        }
    }

    /// Relative endpoint for one page
    pub fn endpoint(&self, page: u64) -> String {
        let path = match self {
            TableKind::Attendants => "atendentes",
            TableKind::Clients => "clientes",
        };
        format!("{}?page={}&limit={}", path, page, self.page_size())
    }

    pub fn headings(&self) -> (&'static str, &'static str) {
        match self {
            TableKind::Attendants => ("Nome do Atendente", "Score do Atendente"),
            TableKind::Clients => ("Nome do Cliente", "Score do Cliente"),
        }
    }

    /// Text colour class of a score cell
    pub fn score_class(&self, score: i64) -> &'static str {
        match self {
            TableKind::Attendants if score > 0 => "text-green-600",
            TableKind::Attendants if score < 0 => "text-red-600",
            TableKind::Attendants => "text-gray-600",
            TableKind::Clients => "text-gray-700",
        }
    }
}

/// Current page of a table (1-based) and its fixed page size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: u64,
    pub page_size: u64,
}

impl PageCursor {
    pub fn new(page_size: u64) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }

    pub fn start_index(&self) -> u64 {
        (self.current_page - 1) * self.page_size
    }

    pub fn end_index(&self, total: u64) -> u64 {
        (self.start_index() + self.page_size).min(total)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self, total: u64) -> bool {
        self.current_page < self.total_pages(total)
    }

    /// "17 - 24 / 40"
    pub fn range_label(&self, total: u64) -> String {
        // No first entry on this page: empty collection or a stale page
        // after the total shrank. Shown as "0 - 0" rather than "1 - 0".
        if self.start_index() >= total {
            return format!("0 - 0 / {}", total);
        }
        format!(
            "{} - {} / {}",
            self.start_index() + 1,
            self.end_index(total),
            total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(TableKind::Attendants.endpoint(1), "atendentes?page=1&limit=8");
        assert_eq!(TableKind::Clients.endpoint(3), "clientes?page=3&limit=10");
    }

    #[test]
    fn test_score_classes() {
        assert_eq!(TableKind::Attendants.score_class(32), "text-green-600");
        assert_eq!(TableKind::Attendants.score_class(-8), "text-red-600");
        assert_eq!(TableKind::Attendants.score_class(0), "text-gray-600");
        assert_eq!(TableKind::Clients.score_class(-8), "text-gray-700");
    }

    #[test]
    fn test_page_three_of_forty() {
        let cursor = PageCursor {
            current_page: 3,
            page_size: 8,
        };
        assert_eq!(cursor.total_pages(40), 5);
        assert_eq!(cursor.range_label(40), "17 - 24 / 40");
        assert!(cursor.can_go_prev());
        assert!(cursor.can_go_next(40));
    }

    #[test]
    fn test_single_entry() {
        let cursor = PageCursor::new(8);
        assert_eq!(cursor.range_label(1), "1 - 1 / 1");
        assert!(!cursor.can_go_prev());
        assert!(!cursor.can_go_next(1));
    }

    #[test]
    fn test_empty_total() {
        let cursor = PageCursor::new(10);
        assert_eq!(cursor.total_pages(0), 0);
        assert_eq!(cursor.range_label(0), "0 - 0 / 0");
        assert!(!cursor.can_go_next(0));
    }

    #[test]
    fn test_page_past_shrunken_total() {
        let cursor = PageCursor {
            current_page: 5,
            page_size: 10,
        };
        assert_eq!(cursor.range_label(30), "0 - 0 / 30");
        assert_eq!(cursor.range_label(45), "41 - 45 / 45");
        assert!(!cursor.can_go_next(30));
    }

    #[test]
    fn test_partial_last_page() {
        let cursor = PageCursor {
            current_page: 2,
            page_size: 10,
        };
        assert_eq!(cursor.range_label(15), "11 - 15 / 15");
        assert!(!cursor.can_go_next(15));
    }
}
