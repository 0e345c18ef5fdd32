//! Column-set derivation and header formatting

use std::collections::HashSet;

use super::FlatRow;

/// The table's column names: the union of every field seen across a dataset.
///
/// A field present in only one row still becomes a column for all rows.
/// Order is first-appearance order while scanning rows top to bottom; it
/// carries no meaning beyond visual stability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSet {
    names: Vec<String>,
}

impl ColumnSet {
    /// Returns the column names in derivation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `true` if the given field is a column.
    pub fn contains(&self, field: &str) -> bool {
        self.names.iter().any(|name| name == field)
    }
}

/// Derives the column set for a dataset of flattened rows.
///
/// Empty datasets yield an empty set; callers render a "no records" state
/// rather than a zero-column table.
pub fn derive_columns(rows: &[FlatRow]) -> ColumnSet {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for row in rows {
        for key in row.keys() {
            if seen.insert(key.to_string()) {
                names.push(key.to_string());
            }
        }
    }

    ColumnSet { names }
}

/// Formats a field name as a human-readable column header.
///
/// Splits on the dotted qualifier (if any), title-cases each part, and joins
/// with a space: `user.email` becomes `User Email`.
pub fn format_header(field: &str) -> String {
    field
        .split('.')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
