//! Board queries and mutations.
//!
//! Boards are the primary container on the platform: they hold groups,
//! items, and columns. This module covers the `boards` query and the
//! board lifecycle mutations.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for board operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "description"];

/// Board operations, accessed via [`Client::boards`].
#[derive(Clone, Copy, Debug)]
pub struct Boards<'a> {
    client: &'a Client,
}

impl<'a> Boards<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries boards.
    ///
    /// Common arguments: `ids`, `limit`, `page`, `workspace_ids`,
    /// `board_kind`, `state`, `order_by`.
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
        self.client.make_request(&build_boards(&args, select)).await
    }

    /// Creates a new board (`create_board`).
    ///
    /// Required arguments: `board_name`, `board_kind`.
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
            "create_board",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Duplicates a board (`duplicate_board`).
    ///
    /// Required arguments: `board_id`, `duplicate_type`. The duplicated
    /// board comes back under a `board` wrapper, so the selection nests
    /// automatically.
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
        let inner = select_or(DEFAULT_SELECT, select);
        let wrapped = vec![SelectField::nested("board", inner)];
        let query = build_query(OperationKind::Mutation, "duplicate_board", &args, &wrapped);
        self.client.make_request(&query).await
    }

    /// Updates a board attribute (`update_board`).
    ///
    /// Required arguments: `board_id`, `board_attribute`, `new_value`.
    /// This mutation returns a plain JSON string, so it takes no
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn update(&self, args: QueryArgs) -> Result<Response, MondayError> {
        let query = build_query(OperationKind::Mutation, "update_board", &args, &[]);
        self.client.make_request(&query).await
    }

    /// Archives a board (`archive_board`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn archive(
        &self,
        board_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("board_id", board_id);
        let query = build_query(
            OperationKind::Mutation,
            "archive_board",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Deletes a board (`delete_board`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn delete(
        &self,
        board_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("board_id", board_id);
        let query = build_query(
            OperationKind::Mutation,
            "delete_board",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }
}

fn build_boards(args: &QueryArgs, select: Option<Vec<SelectField>>) -> String {
    build_query(
        OperationKind::Query,
        "boards",
        args,
        &select_or(DEFAULT_SELECT, select),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::select;

    #[test]
    fn test_boards_query_with_default_select() {
        let query = build_boards(&QueryArgs::new().arg("ids", vec![123]), None);
        assert_eq!(
            query,
            "query { boards (ids: [123]) { id name description } }"
        );
    }

    #[test]
    fn test_boards_query_with_custom_select() {
        let query = build_boards(&QueryArgs::new(), Some(select(&["id"])));
        assert_eq!(query, "query { boards { id } }");
    }

    #[test]
    fn test_create_board_mutation_quotes_multi_word_name() {
        let args = QueryArgs::new()
            .arg("board_name", "my new board")
            .arg("board_kind", "public");
        let query = build_query(
            OperationKind::Mutation,
            "create_board",
            &args,
            &select_or(DEFAULT_SELECT, None),
        );
        assert_eq!(
            query,
            "mutation { create_board (board_name: \"my new board\", board_kind: public) { id name description } }"
        );
    }
}
