//! Record types: the field values a table can browse and the capability a
//! row type needs to be browsed.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// A scalar view of one field of a record.
///
/// Values borrow from the record where they can. Dates travel as ISO-8601
/// text, so their natural string order is chronological.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Cow<'a, str>),
}

impl FieldValue<'_> {
    /// Whether this value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Whether this value is numeric.
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }

    /// Numeric value as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(s: String) -> Self {
        FieldValue::Text(Cow::Owned(s))
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n
                    .as_f64()
                    .map(FieldValue::Float)
                    .unwrap_or_else(|| FieldValue::Text(Cow::Owned(n.to_string()))),
            },
            Value::String(s) => FieldValue::Text(Cow::Borrowed(s)),
            // Nested data is browsed through its compact JSON form
            Value::Array(_) | Value::Object(_) => FieldValue::Text(Cow::Owned(value.to_string())),
        }
    }
}

/// A row that a table can browse.
///
/// Implementors expose a stable identity for rendering keys and an explicit
/// enumeration of their fields, which the "search every field" fallback
/// walks instead of reflecting over the type.
pub trait Record {
    /// Stable identity of the row. The engine does not require uniqueness.
    fn id(&self) -> Cow<'_, str>;

    /// Value of the named field, or `None` when the row has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Names of every field present on this row.
    fn field_names(&self) -> Vec<Cow<'_, str>>;
}

/// JSON objects are records keyed by their members. Any other JSON value
/// is a record with no fields and an empty id.
impl Record for Value {
    fn id(&self) -> Cow<'_, str> {
        match self.get("id") {
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(Value::Number(n)) => Cow::Owned(n.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.as_object()?.get(name).map(FieldValue::from)
    }

    fn field_names(&self) -> Vec<Cow<'_, str>> {
        self.as_object()
            .map(|obj| obj.keys().map(|k| Cow::Borrowed(k.as_str())).collect())
            .unwrap_or_default()
    }
}
