//! Column queries and mutations.
//!
//! Columns are read through their parent boards; column values are read
//! through the board's items. Mutations cover column creation, value
//! changes, and deletion.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::{select_or, with_args};

/// Default fields selected for column operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "title", "description"];

/// Default fields selected for column value queries.
pub const DEFAULT_VALUES_SELECT: &[&str] = &["id", "text", "value"];

/// Column operations, accessed via [`Client::columns`].
#[derive(Clone, Copy, Debug)]
pub struct Columns<'a> {
    client: &'a Client,
}

impl<'a> Columns<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries the columns of boards matching `args`.
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
            "columns",
            select_or(DEFAULT_SELECT, select),
        )];
        let query = build_query(OperationKind::Query, "boards", &args, &nested);
        self.client.make_request(&query).await
    }

    /// Queries the column values of items on boards matching `args`.
    ///
    /// `item_args` applies to the nested `items` field.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn column_values(
        &self,
        args: QueryArgs,
        item_args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_column_values(&args, &item_args, select);
        self.client.make_request(&query).await
    }

    /// Creates a new column (`create_column`).
    ///
    /// Required arguments: `board_id`, `title`, `column_type`.
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
            "create_column",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Changes a column value using a JSON value (`change_column_value`).
    ///
    /// Required arguments: `board_id`, `item_id`, `column_id`, `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn change_value(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "change_column_value",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Changes a column value using a plain string
    /// (`change_simple_column_value`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn change_simple_value(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "change_simple_column_value",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Changes multiple column values at once
    /// (`change_multiple_column_values`).
    ///
    /// Required arguments: `board_id`, `item_id`, `column_values`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn change_multiple_values(
        &self,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Mutation,
            "change_multiple_column_values",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Deletes a column (`delete_column`).
    ///
    /// Required arguments: `board_id`, `column_id`.
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
            "delete_column",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }
}

fn build_column_values(
    args: &QueryArgs,
    item_args: &QueryArgs,
    select: Option<Vec<SelectField>>,
) -> String {
    let nested = vec![SelectField::nested(
        with_args("items", item_args),
        vec![SelectField::nested(
            "column_values",
            select_or(DEFAULT_VALUES_SELECT, select),
        )],
    )];
    build_query(OperationKind::Query, "boards", args, &nested)
}
