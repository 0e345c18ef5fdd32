//! Tabular presentation engine for the mentorship admin dashboard
//!
//! Takes the heterogeneous, arbitrarily nested records the dashboard's REST
//! collaborators return (mentors, mentees, exams, programs, consent records,
//! users, ...) and turns them into display-ready tables: each record is
//! flattened into a single-level row, the column set is the union of all
//! observed field names, rows can be sorted by any column, repeated values
//! are suppressed down a column, and one page at a time is served.

pub mod error;
pub mod model;
pub mod source;
pub mod table;

pub use table::TableSnapshot;
pub use table::TableView;
