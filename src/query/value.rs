//! GraphQL argument values.
//!
//! This module provides the [`QueryValue`] enum, the closed set of value
//! shapes that can appear on the right-hand side of a GraphQL argument.

use std::fmt;

/// A value for a GraphQL argument.
///
/// Values render into GraphQL argument syntax via [`fmt::Display`]:
///
/// - Numbers and booleans render bare: `42`, `true`; whole-valued floats
///   keep a decimal point (`1.0`) so they remain Float literals
/// - Strings render bare when they contain no whitespace, and wrapped in
///   double quotes otherwise: `done` vs `"in progress"`
/// - Objects render as `{key: value, ...}` in insertion order
/// - Lists render as `[a, b, c]`
///
/// # The quoting heuristic
///
/// Whether a string is quoted depends only on whether it contains
/// whitespace, not on its semantic type. A single-word string and a GraphQL
/// enum identifier render identically (`board_kind: public`), which is how
/// this library resolves the enum vs. string-literal ambiguity without
/// schema awareness. Multi-word strings are wrapped in double quotes
/// verbatim, with no escaping of embedded quote characters.
///
/// # Example
///
/// ```rust
/// use monday_api::query::QueryValue;
///
/// assert_eq!(QueryValue::from("hello").to_string(), "hello");
/// assert_eq!(QueryValue::from("hello world").to_string(), "\"hello world\"");
/// assert_eq!(QueryValue::from(42).to_string(), "42");
/// assert_eq!(
///     QueryValue::List(vec![1.into(), 2.into()]).to_string(),
///     "[1, 2]"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A string value, quoted only when it contains whitespace.
    String(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A nested object, rendered as `{key: value, ...}` in insertion order.
    Object(Vec<(String, QueryValue)>),
    /// An ordered list of values, rendered as `[a, b, c]`.
    List(Vec<QueryValue>),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                if s.contains(char::is_whitespace) {
                    write!(f, "\"{s}\"")
                } else {
                    f.write_str(s)
                }
            }
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => {
                // Whole-valued floats keep a decimal point so they stay
                // Float literals rather than collapsing into Int syntax.
                if x.is_finite() && x.fract() == 0.0 {
                    write!(f, "{x:.1}")
                } else {
                    write!(f, "{x}")
                }
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::List(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for QueryValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for QueryValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
