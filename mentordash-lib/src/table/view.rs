//! Table view state machine
//!
//! Owns one list view's dataset and its sort/page state, and produces
//! render-ready snapshots. The states are all "idle": replacing the dataset
//! resets sort and page, a header click re-sorts and returns to page 1, a
//! page click moves within bounds. Loading and error states belong to the
//! data-fetching collaborator, not here.

use super::ColumnSet;
use super::DEFAULT_PAGE_SIZE;
use super::Direction;
use super::FlatRow;
use super::PageState;
use super::SortState;
use super::derive_columns;
use super::flatten;
use super::format_header;
use super::paginate;
use super::sort_rows;
use super::suppress_repeats;
use crate::model::Record;

/// One column header, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// The flattened field name this column reads from.
    pub field: String,
    /// Human-readable label (`user.email` renders as `User Email`).
    pub label: String,
    /// Set when this column is the active sort, for the indicator glyph.
    pub sort: Option<Direction>,
}

/// A render-ready snapshot of the view: headers, one page of suppressed
/// display cells, and pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    /// Display label for the table.
    pub title: String,
    /// Column headers in display order.
    pub headers: Vec<ColumnHeader>,
    /// The current page's cells, row-major, aligned with `headers`.
    pub rows: Vec<Vec<String>>,
    /// Current page number (1-based).
    pub page: usize,
    /// Total page count (at least 1).
    pub total_pages: usize,
    /// Total records in the dataset, across all pages.
    pub total_records: usize,
    /// 1-based index of the first visible record, 0 when empty.
    pub showing_from: usize,
    /// 1-based index of the last visible record, 0 when empty.
    pub showing_to: usize,
}

impl TableSnapshot {
    /// Returns `true` if the dataset is empty and the renderer should show a
    /// "no records" state instead of a table.
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}

/// A list view over a dataset of records.
///
/// # Example
///
/// ```
/// use mentordash_lib::TableView;
/// use mentordash_lib::model::Record;
///
/// let mut view = TableView::new("Exams", 5);
/// view.set_records(&[
///     Record::new().set("examName", "USMLE Step 1"),
///     Record::new().set("examName", "PLAB 1"),
/// ]);
/// view.click_header("examName");
///
/// let snapshot = view.render();
/// assert_eq!(snapshot.total_records, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TableView {
    title: String,
    rows: Vec<FlatRow>,
    columns: ColumnSet,
    sort: SortState,
    page: PageState,
}

impl TableView {
    /// Creates an empty view with the given title and page size.
    pub fn new(title: impl Into<String>, page_size: usize) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            columns: ColumnSet::default(),
            sort: SortState::unsorted(),
            page: PageState::new(page_size),
        }
    }

    /// Creates an empty view with the default page size.
    pub fn with_default_page_size(title: impl Into<String>) -> Self {
        Self::new(title, DEFAULT_PAGE_SIZE)
    }

    /// Returns the view title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of records in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the dataset wholesale, as a refetch does.
    ///
    /// Records are flattened once here; sort resets to none and the page
    /// returns to 1.
    pub fn set_records(&mut self, records: &[Record]) {
        self.rows = records.iter().map(flatten).collect();
        self.columns = derive_columns(&self.rows);
        self.sort = SortState::unsorted();
        self.page.reset();
    }

    /// Handles a click on a column header.
    ///
    /// The active column toggles direction; any other column becomes the
    /// sort field, ascending. Either way the view returns to page 1.
    pub fn click_header(&mut self, field: &str) {
        self.sort.click(field);
        self.page.reset();
    }

    /// Moves to the next page, stopping at the last.
    pub fn next_page(&mut self) {
        self.go_to_page(self.page.number() + 1);
    }

    /// Moves to the previous page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.number().saturating_sub(1));
    }

    /// Jumps to a page, clamped to the valid range.
    pub fn go_to_page(&mut self, number: usize) {
        let total_pages = self.rows.len().div_ceil(self.page.size()).max(1);
        self.page.go_to(number, total_pages);
    }

    /// Runs the full pipeline and returns a render-ready snapshot.
    ///
    /// Pure with respect to the view state: rendering twice in a row yields
    /// identical snapshots.
    pub fn render(&self) -> TableSnapshot {
        let sorted = sort_rows(&self.rows, &self.sort);
        let paged = paginate(&sorted, self.page.number(), self.page.size());
        let rows = suppress_repeats(&paged.rows, &self.columns);

        let headers = self
            .columns
            .names()
            .iter()
            .map(|field| ColumnHeader {
                field: field.clone(),
                label: format_header(field),
                sort: match self.sort.field() {
                    Some(active) if active == field => self.sort.direction(),
                    _ => None,
                },
            })
            .collect();

        let total_records = sorted.len();
        let (showing_from, showing_to) = if total_records == 0 {
            (0, 0)
        } else {
            let from = (self.page.number() - 1) * self.page.size() + 1;
            let to = (self.page.number() * self.page.size()).min(total_records);
            (from.min(total_records), to)
        };

        TableSnapshot {
            title: self.title.clone(),
            headers,
            rows,
            page: self.page.number(),
            total_pages: paged.total_pages,
            total_records,
            showing_from,
            showing_to,
        }
    }
}
