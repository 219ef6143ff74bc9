//! Ordered GraphQL argument maps.
//!
//! This module provides [`QueryArgs`], the argument-list half of the query
//! serializer. Arguments format as `key: value` pairs joined by `", "`,
//! preserving insertion order.

use crate::query::QueryValue;
use std::fmt;

/// An ordered map of GraphQL arguments.
///
/// Keys are identifier-like strings; values are [`QueryValue`]s. Insertion
/// order is preserved and reflected in the formatted output. Setting an
/// existing key replaces its value in place without changing its position,
/// so keys stay unique.
///
/// # Example
///
/// ```rust
/// use monday_api::query::QueryArgs;
///
/// let args = QueryArgs::new()
///     .arg("ids", vec![1, 2])
///     .arg("board_name", "new board");
///
/// assert_eq!(args.format(), "ids: [1, 2], board_name: \"new board\"");
/// assert!(QueryArgs::new().format().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryArgs(Vec<(String, QueryValue)>);

impl QueryArgs {
    /// Creates an empty argument map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds an argument, consuming and returning the map for chaining.
    ///
    /// If the key is already present its value is replaced in place,
    /// keeping the original position.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Adds an argument in place.
    ///
    /// If the key is already present its value is replaced, keeping the
    /// original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Returns `true` if the map has no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Formats the arguments as a GraphQL argument-list fragment.
    ///
    /// Each entry renders as `key: value`; entries are joined with `", "`.
    /// An empty map yields an empty string. Pure: repeated calls yield
    /// identical output.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Iterates over the arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for QueryArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args_format_to_empty_string() {
        assert_eq!(QueryArgs::new().format(), "");
        assert!(QueryArgs::new().is_empty());
    }

    #[test]
    fn test_single_word_value_is_unquoted() {
        let args = QueryArgs::new().arg("key", "hello");
        assert_eq!(args.format(), "key: hello");
    }

    #[test]
    fn test_multi_word_value_is_quoted() {
        let args = QueryArgs::new().arg("key", "hello world");
        assert_eq!(args.format(), "key: \"hello world\"");
    }

    #[test]
    fn test_entries_join_with_comma_space_in_insertion_order() {
        let args = QueryArgs::new()
            .arg("limit", 25)
            .arg("page", 1)
            .arg("state", "active");
        assert_eq!(args.format(), "limit: 25, page: 1, state: active");
    }

    #[test]
    fn test_duplicate_key_replaces_value_in_place() {
        let args = QueryArgs::new()
            .arg("limit", 25)
            .arg("page", 1)
            .arg("limit", 50);
        assert_eq!(args.format(), "limit: 50, page: 1");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_nested_object_value() {
        let args = QueryArgs::new().arg(
            "columns",
            QueryValue::Object(vec![(
                "status".to_string(),
                QueryValue::from("Working on it"),
            )]),
        );
        assert_eq!(args.format(), "columns: {status: \"Working on it\"}");
    }

    #[test]
    fn test_format_is_deterministic() {
        let args = QueryArgs::new().arg("ids", vec![1, 2, 3]).arg("kind", "public");
        assert_eq!(args.format(), args.format());
    }

    #[test]
    fn test_iter_preserves_order() {
        let args = QueryArgs::new().arg("b", 1).arg("a", 2);
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
