//! Board view queries.
//!
//! Views are read through their parent boards:
//! `boards (...) { views { ... } }`.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::select_or;

/// Default fields selected for board view queries.
pub const DEFAULT_SELECT: &[&str] = &["id", "name", "type"];

/// Board view operations, accessed via [`Client::board_views`].
#[derive(Clone, Copy, Debug)]
pub struct BoardViews<'a> {
    client: &'a Client,
}

impl<'a> BoardViews<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries the views of boards matching `args`.
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
            "views",
            select_or(DEFAULT_SELECT, select),
        )];
        let query = build_query(OperationKind::Query, "boards", &args, &nested);
        self.client.make_request(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_nest_under_boards() {
        let nested = vec![SelectField::nested("views", select_or(DEFAULT_SELECT, None))];
        let query = build_query(
            OperationKind::Query,
            "boards",
            &QueryArgs::new().arg("ids", vec![7]),
            &nested,
        );
        assert_eq!(
            query,
            "query { boards (ids: [7]) { views { id name type } } }"
        );
    }
}
