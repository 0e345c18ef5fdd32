//! Sort engine

use std::cmp::Ordering;

use super::FlatRow;
use super::PLACEHOLDER;
use crate::model::Value;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// The active sort of a table view.
///
/// With no field set the dataset keeps its original order. Clicking the
/// active column's header toggles direction; clicking any other column sorts
/// by it ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    field: Option<String>,
    direction: Option<Direction>,
}

impl SortState {
    /// Creates an unsorted state.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Creates a state sorted by the given field.
    pub fn by(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: Some(field.into()),
            direction: Some(direction),
        }
    }

    /// Returns the active sort field, if any.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the active direction, if a field is set.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Applies a header click: toggles direction on the active field, or
    /// switches to the clicked field ascending.
    pub fn click(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = match self.direction {
                Some(Direction::Asc) => Some(Direction::Desc),
                _ => Some(Direction::Asc),
            };
        } else {
            self.field = Some(field.to_string());
            self.direction = Some(Direction::Asc);
        }
    }
}

/// Sorts rows by the active sort field.
///
/// With no field set this is the identity: rows come back in their original
/// order. Otherwise the sort is stable (rows with equal keys keep their
/// relative input order), missing cells compare as the placeholder string,
/// and `Desc` is the exact reverse ordering of `Asc`.
pub fn sort_rows(rows: &[FlatRow], sort: &SortState) -> Vec<FlatRow> {
    let mut sorted = rows.to_vec();
    let Some(field) = sort.field() else {
        return sorted;
    };

    let descending = sort.direction() == Some(Direction::Desc);
    sorted.sort_by(|a, b| {
        let ordering = compare_cells(a.get(field), b.get(field));
        if descending { ordering.reverse() } else { ordering }
    });
    sorted
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let fallback = Value::from(PLACEHOLDER);
    compare_values(a.unwrap_or(&fallback), b.unwrap_or(&fallback))
}

/// Value-dependent comparison: numbers numerically, strings byte-wise
/// (case-sensitive, locale-independent), bools false-before-true, datetimes
/// chronologically. Mixed or exotic pairs fall back to display text.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Int(x), Value::Float(y)) => {
            (*x as f64).partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Value::Float(x), Value::Int(y)) => {
            x.partial_cmp(&(*y as f64)).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        _ => a.display_text().cmp(&b.display_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::table::flatten;

    fn rows(values: &[(&str, i64)]) -> Vec<FlatRow> {
        values
            .iter()
            .map(|(name, seats)| flatten(&Record::new().set("name", *name).set("seats", *seats)))
            .collect()
    }

    fn names(rows: &[FlatRow]) -> Vec<String> {
        rows.iter()
            .map(|row| row.get("name").unwrap().display_text())
            .collect()
    }

    #[test]
    fn test_no_field_is_identity() {
        let input = rows(&[("c", 1), ("a", 2), ("b", 3)]);
        let sorted = sort_rows(&input, &SortState::unsorted());
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_ascending_and_descending() {
        let input = rows(&[("c", 1), ("a", 2), ("b", 3)]);

        let asc = sort_rows(&input, &SortState::by("name", Direction::Asc));
        assert_eq!(names(&asc), vec!["a", "b", "c"]);

        let desc = sort_rows(&input, &SortState::by("name", Direction::Desc));
        assert_eq!(names(&desc), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_numeric_sort() {
        let input = rows(&[("a", 10), ("b", 2), ("c", 30)]);
        let sorted = sort_rows(&input, &SortState::by("seats", Direction::Asc));
        assert_eq!(names(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_stability_on_ties() {
        let input = rows(&[("first", 5), ("second", 5), ("third", 1), ("fourth", 5)]);
        let sorted = sort_rows(&input, &SortState::by("seats", Direction::Asc));
        // Equal keys keep their relative input order.
        assert_eq!(names(&sorted), vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn test_desc_reverses_tie_groups_not_their_contents() {
        let input = rows(&[("first", 5), ("second", 5), ("third", 1)]);
        let desc = sort_rows(&input, &SortState::by("seats", Direction::Desc));
        // The 5-group leads but keeps its internal order.
        assert_eq!(names(&desc), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_desc_is_reverse_of_asc_without_ties() {
        let input = rows(&[("b", 2), ("d", 4), ("a", 1), ("c", 3)]);
        let asc = sort_rows(&input, &SortState::by("seats", Direction::Asc));
        let desc = sort_rows(&input, &SortState::by("seats", Direction::Desc));
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_missing_cells_sort_as_placeholder() {
        let with_plan = flatten(&Record::new().set("name", "a").set("plan", "basic"));
        let without_plan = flatten(&Record::new().set("name", "b"));
        let input = vec![with_plan.clone(), without_plan.clone()];

        let sorted = sort_rows(&input, &SortState::by("plan", Direction::Asc));
        // Byte-wise "Not Applicable" < "basic" (uppercase sorts first), so
        // the missing row groups ahead.
        assert_eq!(sorted, vec![without_plan, with_plan]);
    }

    #[test]
    fn test_click_toggles_and_switches() {
        let mut sort = SortState::unsorted();

        sort.click("name");
        assert_eq!(sort.field(), Some("name"));
        assert_eq!(sort.direction(), Some(Direction::Asc));

        sort.click("name");
        assert_eq!(sort.direction(), Some(Direction::Desc));

        sort.click("seats");
        assert_eq!(sort.field(), Some("seats"));
        assert_eq!(sort.direction(), Some(Direction::Asc));
    }
}
