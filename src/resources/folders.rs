//! Folder queries and mutations.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for folder operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "color"];

/// Folder operations, accessed via [`Client::folders`].
#[derive(Clone, Copy, Debug)]
pub struct Folders<'a> {
    client: &'a Client,
}

impl<'a> Folders<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries folders.
    ///
    /// Common arguments: `ids`, `workspace_ids`, `limit`, `page`.
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
            "folders",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Creates a folder (`create_folder`). Required arguments: `name`.
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
            "create_folder",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Updates a folder (`update_folder`). Required arguments: `folder_id`.
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
            "update_folder",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }

    /// Deletes a folder (`delete_folder`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn delete(
        &self,
        folder_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("folder_id", folder_id);
        let query = build_query(
            OperationKind::Mutation,
            "delete_folder",
            &args,
            &select_or(&["id"], select),
        );
        self.client.make_request(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_folder_mutation() {
        let args = QueryArgs::new()
            .arg("name", "new folder")
            .arg("workspace_id", 99);
        let query = build_query(
            OperationKind::Mutation,
            "create_folder",
            &args,
            &select_or(DEFAULT_SELECT, None),
        );
        assert_eq!(
            query,
            "mutation { create_folder (name: \"new folder\", workspace_id: 99) { id name color } }"
        );
    }
}
