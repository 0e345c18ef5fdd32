//! Dynamic dashboard record

use super::Value;
use crate::error::FieldError;

/// A dynamic record from one of the dashboard's REST collaborators.
///
/// Records hold field values in insertion order, matching the key order of
/// the JSON object they were parsed from. Order matters to the table engine:
/// flatten resolves field-name collisions with "last writer wins", and the
/// column set takes its visual order from each row's own key order.
/// Re-inserting an existing field replaces the value but keeps its position.
///
/// # Example
///
/// ```
/// use mentordash_lib::model::Record;
///
/// let record = Record::new()
///     .set("name", "Cardiology Mentorship")
///     .set("seats", 12i64);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Cardiology Mentorship"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub(crate) fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(key, _)| key == field)
    }

    /// Returns the number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value.
    ///
    /// An existing field keeps its position; a new field is appended.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let index = self.fields.iter().position(|(key, _)| key == field)?;
        Some(self.fields.remove(index).1)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets a nested record field value (an expanded sub-object).
    pub fn get_record(&self, field: &str) -> Result<Option<&Record>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r.as_ref())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "record",
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let record = Record::new()
            .set("zeta", 1i64)
            .set("alpha", 2i64)
            .set("mid", 3i64);

        let keys: Vec<_> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut record = Record::new().set("a", 1i64).set("b", 2i64);
        record.insert("a", 10i64);

        let keys: Vec<_> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&Value::Int(10)));
    }

    #[test]
    fn test_remove() {
        let mut record = Record::new().set("a", 1i64).set("b", 2i64);

        assert_eq!(record.remove("a"), Some(Value::Int(1)));
        assert_eq!(record.remove("a"), None);
        assert!(!record.contains("a"));
        assert!(record.contains("b"));
    }

    #[test]
    fn test_typed_getter_missing() {
        let record = Record::new();
        assert!(matches!(
            record.get_string("name"),
            Err(FieldError::Missing { .. })
        ));
    }

    #[test]
    fn test_typed_getter_mismatch() {
        let record = Record::new().set("active", true);
        assert!(matches!(
            record.get_string("active"),
            Err(FieldError::TypeMismatch { .. })
        ));
        assert_eq!(record.get_bool("active").unwrap(), Some(true));
    }

    #[test]
    fn test_typed_getter_null() {
        let record = Record::new().set("name", Value::Null);
        assert_eq!(record.get_string("name").unwrap(), None);
    }

    #[test]
    fn test_get_record() {
        let user = Record::new().set("email", "mentor@example.org");
        let record = Record::new().set("userId", user.clone());

        assert_eq!(record.get_record("userId").unwrap(), Some(&user));
    }
}
