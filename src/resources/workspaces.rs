//! Workspace queries and mutations.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for workspace operations.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "description"];

/// Workspace operations, accessed via [`Client::workspaces`].
#[derive(Clone, Copy, Debug)]
pub struct Workspaces<'a> {
    client: &'a Client,
}

impl<'a> Workspaces<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries workspaces.
    ///
    /// Common arguments: `ids`, `kind`, `limit`, `page`.
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
            "workspaces",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Creates a workspace (`create_workspace`).
    ///
    /// Required arguments: `name`, `kind`.
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
            "create_workspace",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }

    /// Deletes a workspace (`delete_workspace`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn delete(
        &self,
        workspace_id: i64,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("workspace_id", workspace_id);
        let query = build_query(
            OperationKind::Mutation,
            "delete_workspace",
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
    fn test_create_workspace_mutation() {
        let args = QueryArgs::new()
            .arg("name", "product team")
            .arg("kind", "open");
        let query = build_query(
            OperationKind::Mutation,
            "create_workspace",
            &args,
            &select_or(DEFAULT_SELECT, None),
        );
        assert_eq!(
            query,
            "mutation { create_workspace (name: \"product team\", kind: open) { id name description } }"
        );
    }

    #[test]
    fn test_delete_workspace_mutation() {
        let args = QueryArgs::new().arg("workspace_id", 99_i64);
        let query = build_query(
            OperationKind::Mutation,
            "delete_workspace",
            &args,
            &select_or(&["id"], None),
        );
        assert_eq!(
            query,
            "mutation { delete_workspace (workspace_id: 99) { id } }"
        );
    }
}
