//! Update (post) queries and mutations.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for update operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "body", "created_at"];

/// Update operations, accessed via [`Client::updates`].
#[derive(Clone, Copy, Debug)]
pub struct Updates<'a> {
    client: &'a Client,
}

impl<'a> Updates<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries updates.
    ///
    /// Common arguments: `limit`, `page`.
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
            "updates",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Posts an update on an item (`create_update`).
    ///
    /// Required arguments: `item_id`, `body`.
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
            "create_update",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Likes an update (`like_update`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn like(
        &self,
        update_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("update_id", update_id);
        let query = build_query(
            OperationKind::Mutation,
            "like_update",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Removes all updates from an item (`clear_item_updates`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn clear_item_updates(
        &self,
        item_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("item_id", item_id);
        let query = build_query(
            OperationKind::Mutation,
            "clear_item_updates",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Deletes an update (`delete_update`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn delete(
        &self,
        update_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("id", update_id);
        let query = build_query(
            OperationKind::Mutation,
            "delete_update",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }
}
