//! Value enum for submitted field values

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value carried by a single form field.
///
/// This enum represents everything a decoded web submission can hold for one
/// field. It's used in [`FormData`](super::FormData) to store field values
/// dynamically.
///
/// # Type Mapping
///
/// | Submitted as | Rust Variant |
/// |--------------|--------------|
/// | null / absent | `Null` |
/// | checkbox flag | `Bool` |
/// | text input | `Text` |
/// | `YYYY-MM-DD` date | `Date` |
/// | multi-select | `List` |
///
/// Untagged deserialization maps any JSON string to `Text`, including
/// date-shaped strings. Binding a submission against a form schema coerces
/// date fields from `Text` to `Date`.
///
/// # Example
///
/// ```
/// use taskboard_forms::model::Value;
///
/// let username = Value::from("nina");
/// let remember = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Text value. Also carries secret text; secrecy is a rendering concern.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Multi-select values, in submission order.
    List(Vec<String>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value counts as unfilled: null, text that is
    /// empty or whitespace-only, or an empty list.
    ///
    /// `Bool(false)` is a filled value. An unchecked checkbox is a real
    /// answer, not a missing one.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Bool(_) | Value::Date(_) => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::List(_) => "list",
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

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::List(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::List(v.into_iter().map(str::to_string).collect())
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
