//! Tabular presentation engine
//!
//! The pipeline every list view runs on render:
//!
//! 1. [`flatten`] each record into a single-level [`FlatRow`]
//! 2. [`derive_columns`] unions the observed field names into a [`ColumnSet`]
//! 3. [`sort_rows`] orders the rows by the active [`SortState`]
//! 4. [`paginate`] slices out the current page
//! 5. [`suppress_repeats`] collapses repeated cell values on that page
//!
//! [`TableView`] owns the state and runs the pipeline; everything else is a
//! pure function over in-memory rows, safe to re-run on every render.

mod columns;
mod flatten;
mod page;
mod sort;
mod suppress;
mod view;

pub use columns::*;
pub use flatten::*;
pub use page::*;
pub use sort::*;
pub use suppress::*;
pub use view::*;

/// Sentinel shown for missing, falsy, and suppressed cell values.
pub const PLACEHOLDER: &str = "Not Applicable";

/// Rows per page unless a view is configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;
