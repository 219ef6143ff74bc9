//! GraphQL selection-set formatting.
//!
//! This module provides [`SelectField`] and [`format_select`], the
//! selection-set half of the query serializer. A selection is an ordered
//! sequence of plain field names and nested selections; it formats into the
//! `field nested { inner }` fragment of a GraphQL operation.

/// A single entry in a GraphQL selection set.
///
/// Either a plain field name or a nested selection. Order within a
/// selection is preserved in the formatted output, and duplicate field
/// names are emitted as given (no deduplication).
///
/// # Example
///
/// ```rust
/// use monday_api::query::{format_select, SelectField};
///
/// let select = vec![
///     SelectField::from("id"),
///     SelectField::nested("items", vec!["id".into(), "name".into()]),
/// ];
///
/// assert_eq!(format_select(&select), "id items { id name }");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectField {
    /// A plain field name, emitted verbatim.
    Field(String),
    /// A nested selection, emitted as `name { inner }`.
    Nested {
        /// The field name introducing the nested selection.
        name: String,
        /// The nested selection, in output order.
        fields: Vec<SelectField>,
    },
}

impl SelectField {
    /// Creates a nested selection entry.
    #[must_use]
    pub fn nested(name: impl Into<String>, fields: Vec<SelectField>) -> Self {
        Self::Nested {
            name: name.into(),
            fields,
        }
    }

    /// Builds a selection from a JSON selection spec.
    ///
    /// The spec is an array whose items are either strings (plain fields)
    /// or objects mapping a field name to a nested spec. An object with
    /// multiple keys contributes only its **first** key; the rest are
    /// dropped (first-key-wins is the documented policy, not an error).
    /// The `preserve_order` feature of `serde_json` keeps object key order
    /// equal to insertion order, so "first" is well defined.
    ///
    /// Scalar items other than strings are stringified; `null` and nested
    /// arrays are skipped. A nested spec that is not an array is treated as
    /// a single-entry spec.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_api::query::{format_select, SelectField};
    /// use serde_json::json;
    ///
    /// let select = SelectField::from_json(&json!([
    ///     "hello",
    ///     { "numbers": ["one", "two"] },
    ///     "world",
    /// ]));
    ///
    /// assert_eq!(format_select(&select), "hello numbers { one two } world");
    /// ```
    #[must_use]
    pub fn from_json(spec: &serde_json::Value) -> Vec<Self> {
        let items = match spec {
            serde_json::Value::Array(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };

        let mut fields = Vec::with_capacity(items.len());
        for item in items {
            match item {
                serde_json::Value::String(name) => fields.push(Self::Field(name.clone())),
                serde_json::Value::Number(n) => fields.push(Self::Field(n.to_string())),
                serde_json::Value::Bool(b) => fields.push(Self::Field(b.to_string())),
                serde_json::Value::Object(map) => {
                    // First-key-wins on multi-key maps
                    if let Some((name, nested)) = map.iter().next() {
                        fields.push(Self::Nested {
                            name: name.clone(),
                            fields: Self::from_json(nested),
                        });
                    }
                }
                serde_json::Value::Null | serde_json::Value::Array(_) => {}
            }
        }
        fields
    }
}

impl From<&str> for SelectField {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl From<String> for SelectField {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

/// Builds a flat selection from a list of field names.
#[must_use]
pub fn select(names: &[&str]) -> Vec<SelectField> {
    names.iter().map(|name| SelectField::from(*name)).collect()
}

/// Formats a selection as a GraphQL selection-set fragment.
///
/// Plain fields emit their name; nested entries emit
/// `name { <nested fragment> }`. All fragments are joined by single
/// spaces, preserving input order. An empty selection yields an empty
/// string. Pure: repeated calls yield identical output.
///
/// The walk uses an explicit work stack rather than recursion, so the
/// nesting depth of the input never maps onto call-stack depth.
#[must_use]
pub fn format_select(fields: &[SelectField]) -> String {
    enum Step<'a> {
        Emit(&'a SelectField),
        Close,
    }

    let mut stack: Vec<Step<'_>> = fields.iter().rev().map(Step::Emit).collect();
    let mut out = String::new();

    while let Some(step) = stack.pop() {
        if !out.is_empty() {
            out.push(' ');
        }
        match step {
            Step::Emit(SelectField::Field(name)) => out.push_str(name),
            Step::Emit(SelectField::Nested { name, fields }) => {
                out.push_str(name);
                out.push_str(" {");
                stack.push(Step::Close);
                stack.extend(fields.iter().rev().map(Step::Emit));
            }
            Step::Close => out.push('}'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_fields_join_with_single_spaces() {
        let fields = select(&["hello", "world"]);
        assert_eq!(format_select(&fields), "hello world");
    }

    #[test]
    fn test_empty_selection_is_empty_string() {
        assert_eq!(format_select(&[]), "");
    }

    #[test]
    fn test_nested_selection_uses_braces() {
        let fields = vec![
            SelectField::from("hello"),
            SelectField::nested("numbers", select(&["one", "two"])),
            SelectField::from("world"),
        ];
        assert_eq!(format_select(&fields), "hello numbers { one two } world");
    }

    #[test]
    fn test_deeply_nested_selection() {
        let fields = vec![SelectField::nested(
            "boards",
            vec![
                SelectField::from("id"),
                SelectField::nested("items", vec![SelectField::nested(
                    "column_values",
                    select(&["id", "text"]),
                )]),
            ],
        )];
        assert_eq!(
            format_select(&fields),
            "boards { id items { column_values { id text } } }"
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let fields = select(&["b", "a", "c"]);
        assert_eq!(format_select(&fields), "b a c");
    }

    #[test]
    fn test_duplicates_are_not_deduplicated() {
        let fields = select(&["id", "id"]);
        assert_eq!(format_select(&fields), "id id");
    }

    #[test]
    fn test_format_is_deterministic() {
        let fields = vec![SelectField::nested("items", select(&["id", "name"]))];
        assert_eq!(format_select(&fields), format_select(&fields));
    }

    #[test]
    fn test_pathological_nesting_does_not_overflow_the_stack() {
        let mut field = SelectField::from("leaf");
        for _ in 0..100_000 {
            field = SelectField::nested("level", vec![field]);
        }
        let formatted = format_select(std::slice::from_ref(&field));
        assert!(formatted.starts_with("level { level {"));
        assert!(formatted.ends_with("} }"));
    }

    #[test]
    fn test_from_json_plain_and_nested() {
        let fields = SelectField::from_json(&json!([
            "hello",
            { "numbers": ["one", "two"] },
            "world",
        ]));
        assert_eq!(format_select(&fields), "hello numbers { one two } world");
    }

    #[test]
    fn test_from_json_first_key_wins_on_multi_key_maps() {
        // serde_json's preserve_order feature keeps insertion order, so the
        // first key in source order is the one that survives.
        let fields = SelectField::from_json(&json!([
            { "first": ["a"], "second": ["b"] },
        ]));
        assert_eq!(format_select(&fields), "first { a }");
    }

    #[test]
    fn test_from_json_skips_null_entries() {
        let fields = SelectField::from_json(&json!(["id", null, "name"]));
        assert_eq!(format_select(&fields), "id name");
    }

    #[test]
    fn test_from_json_stringifies_scalar_items() {
        let fields = SelectField::from_json(&json!(["id", 2]));
        assert_eq!(format_select(&fields), "id 2");
    }

    #[test]
    fn test_from_json_non_array_nested_spec_is_single_entry() {
        let fields = SelectField::from_json(&json!([{ "creator": "id" }]));
        assert_eq!(format_select(&fields), "creator { id }");
    }
}
