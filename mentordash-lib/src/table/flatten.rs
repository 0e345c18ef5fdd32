//! Record flattening
//!
//! Collapses an arbitrarily nested record into a single-level row the table
//! can display. Nested objects merge their fields into the top level with no
//! namespacing; arrays and datetimes are kept as-is.

use chrono::DateTime;
use chrono::Utc;

use super::PLACEHOLDER;
use crate::model::Record;
use crate::model::Value;

/// Audit timestamps formatted to display text at flatten time.
const DATE_FIELDS: [&str; 2] = ["createdAt", "updatedAt"];

/// User-reference fields consulted (in order) for the derived email column.
const USER_REFS: [&str; 2] = ["userId", "user_id"];

/// Derived column naming the owning user's email.
const USER_EMAIL: &str = "user.email";

/// Internal fields stripped from every row after all other transforms.
const DENY_LIST: [&str; 4] = ["_id", "userId", "user_id", "firstName"];

/// The single-level, display-ready projection of one [`Record`].
///
/// Cells keep their insertion order, like [`Record`] fields do, because the
/// column set takes its visual order from each row's own key order. Values
/// stay as [`Value`]s here; conversion to display text (and placeholder
/// substitution) happens per page in the suppression step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatRow {
    cells: Vec<(String, Value)>,
}

impl FlatRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Returns a reference to a cell value, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the row has a cell for the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.cells.iter().any(|(key, _)| key == field)
    }

    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Sets a cell value. An existing field keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(key, _)| *key == field) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((field, value)),
        }
    }

    /// Removes a cell and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let index = self.cells.iter().position(|(key, _)| key == field)?;
        Some(self.cells.remove(index).1)
    }
}

/// Flattens a record into a single-level row.
///
/// - Nested object fields merge into the top level with **no namespacing**;
///   on a name collision the last writer (in key enumeration order) wins.
///   That collision rule is inherited dashboard behavior, preserved as-is.
/// - Arrays are not descended into; they join into display text at render.
/// - `createdAt`/`updatedAt` become formatted display strings when present.
/// - `user.email` is always added: taken from the first truthy of `userId`/
///   `user_id` when that reference is an expanded record with an email,
///   otherwise the placeholder.
/// - A present `token` is replaced by `isLoggedIn` = `"Yes"`/`"No"`.
/// - `_id`, `userId`, `user_id` and `firstName` are stripped unconditionally.
///
/// Pure: the input record is never mutated, and flattening the same record
/// twice yields identical rows.
pub fn flatten(record: &Record) -> FlatRow {
    let mut row = FlatRow::new();
    merge_fields(record, &mut row);

    // The top-level record alone decides user.email; nested references do not.
    let email = USER_REFS
        .iter()
        .filter_map(|field| record.get(field))
        .find(|value| value.is_truthy())
        .and_then(|value| match value {
            Value::Record(user) => user
                .get("email")
                .filter(|email| email.is_truthy())
                .map(Value::display_text),
            _ => None,
        });
    row.insert(USER_EMAIL, email.unwrap_or_else(|| PLACEHOLDER.to_string()));

    if let Some(token) = row.remove("token") {
        let logged_in = if token.is_truthy() { "Yes" } else { "No" };
        row.insert("isLoggedIn", logged_in);
    }

    for field in DATE_FIELDS {
        let formatted = match row.get(field) {
            Some(value) if value.is_truthy() => format_date(value),
            _ => None,
        };
        if let Some(text) = formatted {
            row.insert(field, text);
        }
    }

    for field in DENY_LIST {
        row.remove(field);
    }

    row
}

fn merge_fields(record: &Record, row: &mut FlatRow) {
    for (key, value) in record.iter() {
        match value {
            Value::Record(nested) => merge_fields(nested, row),
            other => row.insert(key, other.clone()),
        }
    }
}

/// Formats a date-like value for display. Unparseable strings stay as-is.
fn format_date(value: &Value) -> Option<String> {
    match value {
        Value::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S").to_string()),
        _ => None,
    }
}
