//! Page cursor arithmetic
//!
//! A cursor owns the current page of one table. Everything else the table
//! shows (total pages, the "X - Y / total" label, whether the buttons are
//! enabled) is derived from the cursor plus the total the backend reported.

/// Current page of a paginated table (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current_page: u64,
    page_size: u64,
}

impl PageCursor {
    /// Cursor on page 1. A page size of zero is bumped to one.
    pub fn new(page_size: u64) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// `ceil(total / page_size)`; zero when there is nothing to show
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }

    /// Offset of the first entry on the current page
    pub fn start_index(&self) -> u64 {
        (self.current_page - 1) * self.page_size
    }

    /// One past the last entry on the current page, capped at `total`
    pub fn end_index(&self, total: u64) -> u64 {
        (self.start_index() + self.page_size).min(total)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self, total: u64) -> bool {
        self.current_page < self.total_pages(total)
    }

    /// Step back one page. Returns false (and does nothing) on page 1.
    pub fn prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Step forward one page. Returns false (and does nothing) on the last page.
    pub fn next(&mut self, total: u64) -> bool {
        if !self.can_go_next(total) {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// "X - Y / total" with X the 1-based position of the first entry
    pub fn range_label(&self, total: u64) -> String {
        // An empty collection, or a page left behind by a shrinking total,
        // has no first entry; "0 - 0" instead of "1 - 0" or "41 - 30".
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
    fn test_total_pages_is_ceiling() {
        let cursor = PageCursor::new(8);
        assert_eq!(cursor.total_pages(0), 0);
        assert_eq!(cursor.total_pages(1), 1);
        assert_eq!(cursor.total_pages(8), 1);
        assert_eq!(cursor.total_pages(9), 2);
        assert_eq!(cursor.total_pages(96), 12);

        for page_size in 1..=12u64 {
            let cursor = PageCursor::new(page_size);
            for total in 0..=50u64 {
                let expected = (total as f64 / page_size as f64).ceil() as u64;
                assert_eq!(cursor.total_pages(total), expected);
            }
        }
    }

    #[test]
    fn test_empty_total_disables_both_directions() {
        let mut cursor = PageCursor::new(10);
        assert!(!cursor.can_go_prev());
        assert!(!cursor.can_go_next(0));
        assert!(!cursor.next(0));
        assert!(!cursor.prev());
        assert_eq!(cursor.current_page(), 1);
        assert_eq!(cursor.range_label(0), "0 - 0 / 0");
    }

    #[test]
    fn test_indices_cover_every_page() {
        let total = 23;
        let mut cursor = PageCursor::new(10);
        let mut covered = 0;

        loop {
            let start = cursor.start_index();
            let end = cursor.end_index(total);
            assert_eq!(start, (cursor.current_page() - 1) * 10);
            assert_eq!(start, covered);
            covered = end;
            if !cursor.next(total) {
                break;
            }
        }

        assert_eq!(covered, total);
        assert_eq!(cursor.current_page(), 3);
        assert_eq!(cursor.range_label(total), "21 - 23 / 23");
    }

    #[test]
    fn test_prev_next_bounds() {
        let total = 40; // 5 pages of 8
        let mut cursor = PageCursor::new(8);

        assert!(!cursor.prev());
        assert!(cursor.next(total));
        assert_eq!(cursor.current_page(), 2);
        assert!(cursor.next(total));
        assert_eq!(cursor.current_page(), 3);

        while cursor.next(total) {}
        assert_eq!(cursor.current_page(), 5);
        assert!(!cursor.can_go_next(total));
        assert!(cursor.can_go_prev());

        assert!(cursor.prev());
        assert_eq!(cursor.current_page(), 4);
    }

    #[test]
    fn test_single_entry_label() {
        let cursor = PageCursor::new(8);
        assert_eq!(cursor.range_label(1), "1 - 1 / 1");
        assert!(!cursor.can_go_prev());
        assert!(!cursor.can_go_next(1));
    }

    #[test]
    fn test_label_when_total_shrinks_below_page() {
        let mut cursor = PageCursor::new(10);
        for _ in 0..4 {
            assert!(cursor.next(100));
        }
        assert_eq!(cursor.current_page(), 5);
        assert_eq!(cursor.range_label(100), "41 - 50 / 100");

        assert_eq!(cursor.range_label(30), "0 - 0 / 30");
        assert_eq!(cursor.range_label(40), "0 - 0 / 40");
        assert_eq!(cursor.range_label(41), "41 - 41 / 41");
        assert!(!cursor.can_go_next(30));
        assert!(cursor.can_go_prev());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let cursor = PageCursor::new(0);
        assert_eq!(cursor.page_size(), 1);
        assert_eq!(cursor.total_pages(3), 3);
    }
}
