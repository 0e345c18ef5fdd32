//! Pagination

use super::FlatRow;

/// The current page of a table view.
///
/// Page numbers are 1-based. The page size is fixed per view instance; it is
/// configuration, not something the user adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    number: usize,
    size: usize,
}

impl PageState {
    /// Creates page 1 with the given page size (clamped to at least 1).
    pub fn new(size: usize) -> Self {
        Self {
            number: 1,
            size: size.max(1),
        }
    }

    /// Returns the current page number (1-based).
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the page size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Resets to page 1. Happens on any sort change or dataset replacement.
    pub fn reset(&mut self) {
        self.number = 1;
    }

    /// Moves to the given page, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, number: usize, total_pages: usize) {
        self.number = number.clamp(1, total_pages.max(1));
    }
}

/// One page of rows plus the page count.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged {
    /// The rows of the requested page, in order.
    pub rows: Vec<FlatRow>,
    /// Total page count, never less than 1.
    pub total_pages: usize,
}

/// Slices out one page of rows.
///
/// `total_pages` is `ceil(rows.len() / page_size)`, with a floor of one page
/// so an empty dataset still reports a single (empty) page; callers render a
/// "no records" state for that case. Out-of-range page numbers clamp to the
/// array bounds and yield an empty slice rather than an error.
pub fn paginate(rows: &[FlatRow], page_number: usize, page_size: usize) -> Paged {
    let page_size = page_size.max(1);
    let total_pages = rows.len().div_ceil(page_size).max(1);

    let start = page_number.saturating_sub(1).saturating_mul(page_size).min(rows.len());
    let end = (start + page_size).min(rows.len());

    Paged {
        rows: rows[start..end].to_vec(),
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::table::flatten;

    fn rows(count: usize) -> Vec<FlatRow> {
        (0..count)
            .map(|i| flatten(&Record::new().set("index", i as i64)))
            .collect()
    }

    #[test]
    fn test_full_and_final_page() {
        let rows = rows(12);

        let first = paginate(&rows, 1, 5);
        assert_eq!(first.rows.len(), 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows[0], rows[0]);

        let last = paginate(&rows, 3, 5);
        assert_eq!(last.rows.len(), 2);
        assert_eq!(last.rows[0], rows[10]);
    }

    #[test]
    fn test_exact_multiple() {
        let rows = rows(10);
        let paged = paginate(&rows, 2, 5);
        assert_eq!(paged.total_pages, 2);
        assert_eq!(paged.rows.len(), 5);
    }

    #[test]
    fn test_out_of_range_returns_empty_slice() {
        let rows = rows(3);
        let paged = paginate(&rows, 9, 5);
        assert!(paged.rows.is_empty());
        assert_eq!(paged.total_pages, 1);
    }

    #[test]
    fn test_empty_dataset_reports_one_page() {
        let paged = paginate(&[], 1, 5);
        assert!(paged.rows.is_empty());
        assert_eq!(paged.total_pages, 1);
    }

    #[test]
    fn test_page_state_clamping() {
        let mut page = PageState::new(5);
        page.go_to(7, 3);
        assert_eq!(page.number(), 3);
        page.go_to(0, 3);
        assert_eq!(page.number(), 1);
        page.reset();
        assert_eq!(page.number(), 1);
    }
}
