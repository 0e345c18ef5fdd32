//! Value enum for dynamic field values

use chrono::DateTime;
use chrono::Utc;

use super::Record;

/// A dynamic value that can hold any field type a dashboard record carries.
///
/// Records arrive as arbitrary JSON, so this enum covers the JSON value
/// space plus a native datetime variant for callers that construct records
/// programmatically.
///
/// # Example
///
/// ```
/// use mentordash_lib::model::Value;
///
/// let name = Value::from("Aisha");
/// let score = Value::from(92i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Array value. Never descended into by flatten.
    Array(Vec<Value>),
    /// Nested record (an expanded sub-object).
    Record(Box<Record>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }

    /// Returns `true` if this value counts as present for display purposes.
    ///
    /// Follows the truthiness rules the dashboard always used: `Null`,
    /// `false`, `0`, `0.0`, NaN and the empty string are falsy. Arrays and
    /// nested records are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::DateTime(_) | Value::Array(_) | Value::Record(_) => true,
        }
    }

    /// Converts this value to its cell display text.
    ///
    /// Booleans render as `Yes`/`No`, arrays join their elements with `", "`,
    /// datetimes format as `%Y-%m-%d %H:%M:%S` in UTC. Nested records render
    /// empty; flatten merges them away before any cell is displayed, so this
    /// only matters for records hiding inside arrays.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "Yes".to_string(),
            Value::Bool(false) => "No".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Value::Array(items) => items
                .iter()
                .map(Value::display_text)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Record(_) => String::new(),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(Box::new(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
