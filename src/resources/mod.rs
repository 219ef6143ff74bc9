//! Resource-oriented method surface for the monday.com API.
//!
//! Each submodule wraps one platform resource (boards, items, columns,
//! updates, ...) with thin methods that assemble a GraphQL operation
//! string from [`QueryArgs`](crate::query::QueryArgs) and a selection, then
//! delegate to [`Client::make_request`](crate::Client::make_request). No
//! retries and no pagination engine live here: pagination is caller-driven
//! by passing `limit`/`page` or cursor arguments and reading the cursor out
//! of the response body.
//!
//! Every query method accepts an optional selection; `None` selects the
//! resource's default field list (the `DEFAULT_SELECT` constant in each
//! module).

mod account;
mod activity_logs;
mod board_views;
mod boards;
mod columns;
mod files;
mod folders;
mod groups;
mod items;
mod subitems;
mod tags;
mod teams;
mod updates;
mod users;
mod workspaces;

pub use account::Account;
pub use activity_logs::ActivityLogs;
pub use board_views::BoardViews;
pub use boards::Boards;
pub use columns::Columns;
pub use files::Files;
pub use folders::Folders;
pub use groups::Groups;
pub use items::Items;
pub use subitems::Subitems;
pub use tags::Tags;
pub use teams::Teams;
pub use updates::Updates;
pub use users::Users;
pub use workspaces::Workspaces;

use crate::query::{select, QueryArgs, SelectField};

/// Resolves an optional caller selection against a default field list.
pub(crate) fn select_or(default: &[&str], fields: Option<Vec<SelectField>>) -> Vec<SelectField> {
    fields.unwrap_or_else(|| select(default))
}

/// Renders a nested field name with an inline argument list.
///
/// Nested fields carry their arguments in the field-name position of the
/// selection (`activity_logs (limit: 5)`), which is how string assembly
/// expresses arguments below the top level.
pub(crate) fn with_args(field: &str, args: &QueryArgs) -> String {
    if args.is_empty() {
        field.to_string()
    } else {
        format!("{field} ({})", args.format())
    }
}
