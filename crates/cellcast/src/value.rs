//! The strongly typed result of a token evaluation.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// The most plausible typed reading of a single token.
///
/// `Float` carries infinities and NaN, so spreadsheet sentinels like
/// `#DIV/0` have a faithful representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent/missing.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A calendar date with no time component.
    Date(NaiveDate),
    Str(String),
    /// A flow sequence literal.
    List(Vec<Value>),
    /// A flow mapping literal, keys stringified.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Returns true for the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for integer or float values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Numeric value widened to f64, if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}
