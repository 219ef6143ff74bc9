//! Subitem queries and mutations.
//!
//! Subitems are read through their parent items:
//! `items (...) { subitems { ... } }`.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for subitem operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "created_at"];

/// Subitem operations, accessed via [`Client::subitems`].
#[derive(Clone, Copy, Debug)]
pub struct Subitems<'a> {
    client: &'a Client,
}

impl<'a> Subitems<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries the subitems of items matching `args`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn query(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let nested = vec![SelectField::nested(
            "subitems",
            select_or(DEFAULT_SELECT, select),
        )];
        let query = build_query(OperationKind::Query, "items", &args, &nested);
        self.client.make_request(&query).await
    }

    /// Creates a subitem under a parent item (`create_subitem`).
    ///
    /// Required arguments: `parent_item_id`, `item_name`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn create(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "create_subitem",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }
}
