//! GraphQL query-string assembly.
//!
//! This module is the narrow seam between native data structures and
//! GraphQL text. Queries are built by string assembly, not from an AST:
//! there is no schema awareness, type checking, or validation. The seam is
//! kept narrow so a structured builder could replace it later without
//! touching the resource methods.
//!
//! # Overview
//!
//! The main pieces are:
//!
//! - [`QueryValue`]: the closed set of argument value shapes
//! - [`QueryArgs`]: an ordered argument map, formatting to `key: value, ...`
//! - [`SelectField`] / [`format_select`]: ordered selection sets
//! - [`build_query`]: assembles a full operation string
//!
//! # Example
//!
//! ```rust
//! use monday_api::query::{build_query, select, OperationKind, QueryArgs};
//!
//! let query = build_query(
//!     OperationKind::Query,
//!     "boards",
//!     &QueryArgs::new().arg("ids", vec![123]),
//!     &select(&["id", "name"]),
//! );
//!
//! assert_eq!(query, "query { boards (ids: [123]) { id name } }");
//! ```

mod args;
mod select;
mod value;

pub use args::QueryArgs;
pub use select::{format_select, select, SelectField};
pub use value::QueryValue;

use std::fmt;

/// The kind of GraphQL operation to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// A read operation.
    Query,
    /// A write operation.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// Assembles a complete GraphQL operation string.
///
/// The operation wraps a single top-level field with an optional argument
/// list and an optional selection set:
///
/// - `query { field { select } }` when there are no arguments
/// - `mutation { field (args) { select } }` with arguments
/// - `mutation { field (args) }` when the selection is empty
///
/// Pure string assembly; repeated calls with equal inputs yield identical
/// strings.
#[must_use]
pub fn build_query(
    kind: OperationKind,
    field: &str,
    args: &QueryArgs,
    select: &[SelectField],
) -> String {
    let mut query = format!("{kind} {{ {field}");

    if !args.is_empty() {
        query.push_str(" (");
        query.push_str(&args.format());
        query.push(')');
    }

    if !select.is_empty() {
        query.push_str(" { ");
        query.push_str(&format_select(select));
        query.push_str(" }");
    }

    query.push_str(" }");
    query
}
