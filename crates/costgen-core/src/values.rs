//! Cell values for generated billing rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar cell in a billing row.
///
/// Provider exports are flat files, so every cell is one of a string, an
/// integer or a float. Timestamps are stored pre-formatted as strings in
/// the provider's own layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowValue {
    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),
}

impl RowValue {
    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            Self::String(_) => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is a numeric (integer or float) value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Render the value as a flat-file field.
    pub fn to_field(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for RowValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RowValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for RowValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for RowValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
