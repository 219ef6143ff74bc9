//! Activity log queries.
//!
//! Activity logs are read through their parent boards:
//! `boards (ids: ...) { activity_logs (...) { ... } }`.

use crate::clients::{Client, MondayError, Response};
use crate::query::{build_query, OperationKind, QueryArgs, SelectField};
use crate::resources::{select_or, with_args};

/// Default fields selected for activity log queries.
pub const DEFAULT_SELECT: &[&str] = &["id", "event", "data"];

/// Activity log operations, accessed via [`Client::activity_logs`].
#[derive(Clone, Copy, Debug)]
pub struct ActivityLogs<'a> {
    client: &'a Client,
}

impl<'a> ActivityLogs<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queries the activity logs of the given boards.
    ///
    /// `args` applies to the nested `activity_logs` field (`limit`,
    /// `page`, `user_ids`, `from`, `to`).
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for transport, parse, or classified API
    /// failures.
    pub async fn query(
        &self,
        board_ids: Vec<i64>,
        args: QueryArgs,
        select: Option<Vec<SelectField>>,
    ) -> Result<Response, MondayError> {
        let query = build_activity_logs(&board_ids, &args, select);
        self.client.make_request(&query).await
    }
}

fn build_activity_logs(
    board_ids: &[i64],
    args: &QueryArgs,
    select: Option<Vec<SelectField>>,
) -> String {
    let board_args = QueryArgs::new().arg("ids", board_ids.to_vec());
    let nested = vec![SelectField::nested(
        with_args("activity_logs", args),
        select_or(DEFAULT_SELECT, select),
    )];
    build_query(OperationKind::Query, "boards", &board_args, &nested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_logs_nest_under_boards() {
        let query = build_activity_logs(&[123], &QueryArgs::new(), None);
        assert_eq!(
            query,
            "query { boards (ids: [123]) { activity_logs { id event data } } }"
        );
    }

    #[test]
    fn test_nested_args_render_inline() {
        let args = QueryArgs::new().arg("limit", 5);
        let query = build_activity_logs(&[1, 2], &args, None);
        assert_eq!(
            query,
            "query { boards (ids: [1, 2]) { activity_logs (limit: 5) { id event data } } }"
        );
    }
}
