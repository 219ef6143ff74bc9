//! Account queries.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for account queries.
pub const DEFAULT_SELECT: &[&str] = &["id", "name"];

/// Account operations, accessed via [`Client::account`].
#[derive(Clone, Copy, Debug)]
pub struct Account<'a> {
    client: &'a Client,
}

impl<'a> Account<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries the account the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn query(&self, select: Option<Vec<SelectField>>) -> Result<Response, MondayError> {
        let query = build_query(
            OperationKind::Query,
            "account",
            &QueryArgs::new(),
            &select_or(DEFAULT_SELECT, select),
        );
        self.client.make_request(&query).await
    }
}
