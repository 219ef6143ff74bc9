//! Group queries and mutations.
//!
//! Groups are sections within a board. They are read through their parent
//! boards; mutations address them directly.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for group operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "title"];

/// Group operations, accessed via [`Client::groups`].
#[derive(Clone, Copy, Debug)]
pub struct Groups<'a> {
    client: &'a Client,
}

impl<'a> Groups<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries the groups of boards matching `args`.
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
            "groups",
            select_or(DEFAULT_SELECT, select),
        )];
        let query = build_query(OperationKind::Query, "boards", &args, &nested);
        self.client.make_request(&query).await
    }

    /// Creates a group (`create_group`).
    ///
    /// Required arguments: `board_id`, `group_name`.
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
            "create_group",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Updates a group attribute (`update_group`).
    ///
    /// Required arguments: `board_id`, `group_id`, `group_attribute`,
    /// `new_value`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn update(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "update_group",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Duplicates a group (`duplicate_group`).
    ///
    /// Required arguments: `board_id`, `group_id`.
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
            "duplicate_group",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Archives a group (`archive_group`).
    ///
    /// Required arguments: `board_id`, `group_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn archive(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "archive_group",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Deletes a group (`delete_group`).
    ///
    /// Required arguments: `board_id`, `group_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn delete(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "delete_group",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Moves an item to a group (`move_item_to_group`).
    ///
    /// Required arguments: `item_id`, `group_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn move_item(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "move_item_to_group",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }
}
