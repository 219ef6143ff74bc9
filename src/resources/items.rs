//! Item queries and mutations.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for item operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "created_at"];

/// Item operations, accessed via [`Client::items`].
#[derive(Clone, Copy, Debug)]
pub struct Items<'a> {
    client: &'a Client,
}

impl<'a> Items<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries items.
    ///
    /// Common arguments: `ids`, `limit`, `page`, `newest_first`.
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
        let query = build_query(
            OperationKind::Query,
            "items",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Creates an item (`create_item`).
    ///
    /// Required arguments: `board_id`, `item_name`.
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
            "create_item",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Duplicates an item (`duplicate_item`).
    ///
    /// Required arguments: `board_id`, `item_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn duplicate(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "duplicate_item",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Archives an item (`archive_item`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn archive(
        &self,
        item_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("item_id", item_id);
        let query = build_query(
            OperationKind::Mutation,
            "archive_item",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Deletes an item (`delete_item`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn delete(
        &self,
        item_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("item_id", item_id);
        let query = build_query(
            OperationKind::Mutation,
            "delete_item",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }
}
