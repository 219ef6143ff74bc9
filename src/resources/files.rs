//! File (asset) queries.
//!
//! Exposes asset metadata via the `assets` query. Uploading file content
//! is a multipart transport concern and is not part of this client.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for asset queries.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "url"];

/// File operations, accessed via [`Client::files`].
#[derive(Clone, Copy, Debug)]
pub struct Files<'a> {
    client: &'a Client,
}

impl<'a> Files<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries assets by id.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn assets(
        &self,
        asset_ids: Vec<i64>,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let args = QueryArgs::new().arg("ids", asset_ids);
        let query = build_query(
            OperationKind::Query,
            "assets",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }
}
