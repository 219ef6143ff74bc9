//! Team queries.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for team queries.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "picture_url"];

/// Team operations, accessed via [`Client::teams`].
#[derive(Clone, Copy, Debug)]
pub struct Teams<'a> {
    client: &'a Client,
}

impl<'a> Teams<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries teams.
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
            "teams",
            &args,
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }
}
