//! Repeat suppression
//!
//! The "waterfall" display transform: down each column of the current page,
//! a value identical to the last one shown is replaced by the placeholder so
//! only changes stand out.

use std::collections::HashMap;

use super::ColumnSet;
use super::FlatRow;
use super::PLACEHOLDER;
use crate::model::Value;

/// Converts a page of rows into display cells with repeats suppressed.
///
/// Operates on the current page only, in final display order; suppression
/// never reaches across a page boundary, so a value repeated at the seam of
/// two pages shows on both. Each output row holds one display string per
/// column, in column order.
///
/// Scanning top to bottom, a per-column tracker remembers the last value
/// actually emitted. Falsy or empty cells become the placeholder. A cell
/// equal to the tracker becomes the placeholder **without** advancing the
/// tracker, so in a run of three the second and third are suppressed and a
/// later different value is compared against the first. Anything else is
/// shown verbatim and becomes the new tracker value.
pub fn suppress_repeats(page_rows: &[FlatRow], columns: &ColumnSet) -> Vec<Vec<String>> {
    let mut last_emitted: HashMap<&str, String> = HashMap::new();

    page_rows
        .iter()
        .map(|row| {
            columns
                .names()
                .iter()
                .map(|column| {
                    let cell = row.get(column);
                    let text = cell.map(Value::display_text).unwrap_or_default();
                    let present = cell.is_some_and(Value::is_truthy) && !text.is_empty();

                    if !present {
                        PLACEHOLDER.to_string()
                    } else if last_emitted.get(column.as_str()) == Some(&text) {
                        PLACEHOLDER.to_string()
                    } else {
                        last_emitted.insert(column, text.clone());
                        text
                    }
                })
                .collect()
        })
        .collect()
}
