//! The monday.com API client.
//!
//! This module provides the [`Client`] type, the entry point for all API
//! operations. A client is constructed from a [`MondayConfig`] and exposes
//! the resource-oriented method surface via namespaced accessors
//! (`client.boards()`, `client.items()`, ...).

use crate::clients::errors::MondayError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_response::Response;
use crate::config::{ApiVersion, MondayConfig};
use crate::resources;

/// Client for the monday.com GraphQL API.
///
/// Holds the configured HTTP transport and exposes one accessor per
/// resource. The client is stateless between calls; there is no shared
/// mutable state, so concurrent calls through a shared client are
/// independent and order-insensitive.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use monday_api::{ApiToken, Client, MondayConfig};
/// use monday_api::query::QueryArgs;
///
/// let config = MondayConfig::builder()
///     .token(ApiToken::new("my-api-token")?)
///     .build()?;
/// let client = Client::new(config);
///
/// let response = client
///     .boards()
///     .query(QueryArgs::new().arg("ids", vec![123]), None)
///     .await?;
/// println!("boards: {}", response.body["data"]["boards"]);
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from the given configuration.
    ///
    /// Infallible: configuration is validated when it is built.
    #[must_use]
    pub fn new(config: MondayConfig) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            http_client,
            api_version: config.api_version().clone(),
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Sends a GraphQL query string to the API.
    ///
    /// This is the single transport seam all resource methods delegate to.
    /// One HTTP POST per call; no retries.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] for network failures, malformed JSON bodies,
    /// and classified API errors. Note that this platform reports many
    /// errors with HTTP 200 and an error payload; those classify as
    /// [`MondayError::Api`] and carry the full [`Response`] for inspection.
    pub async fn make_request(&self, query: &str) -> Result<Response, MondayError> {
        self.http_client.post_query(query, None).await
    }

    /// Sends a GraphQL query with a per-call API version override.
    ///
    /// The override applies to this call's `API-Version` header only; the
    /// client's configured version is untouched.
    pub async fn make_request_with_version(
        &self,
        query: &str,
        version: &ApiVersion,
    ) -> Result<Response, MondayError> {
        if version == &self.api_version {
            tracing::debug!("redundant API version override to the default {version}");
        } else {
            tracing::debug!(
                "overriding default API version {} with {version}",
                self.api_version
            );
        }
        self.http_client.post_query(query, Some(version)).await
    }

    /// Account operations.
    #[must_use]
    pub const fn account(&self) -> resources::Account<'_> {
        resources::Account::new(self)
    }

    /// Activity log operations.
    #[must_use]
    pub const fn activity_logs(&self) -> resources::ActivityLogs<'_> {
        resources::ActivityLogs::new(self)
    }

    /// Board view operations.
    #[must_use]
    pub const fn board_views(&self) -> resources::BoardViews<'_> {
        resources::BoardViews::new(self)
    }

    /// Board operations.
    #[must_use]
    pub const fn boards(&self) -> resources::Boards<'_> {
        resources::Boards::new(self)
    }

    /// Column operations.
    #[must_use]
    pub const fn columns(&self) -> resources::Columns<'_> {
        resources::Columns::new(self)
    }

    /// File (asset) operations.
    #[must_use]
    pub const fn files(&self) -> resources::Files<'_> {
        resources::Files::new(self)
    }

    /// Folder operations.
    #[must_use]
    pub const fn folders(&self) -> resources::Folders<'_> {
        resources::Folders::new(self)
    }

    /// Group operations.
    #[must_use]
    pub const fn groups(&self) -> resources::Groups<'_> {
        resources::Groups::new(self)
    }

    /// Item operations.
    #[must_use]
    pub const fn items(&self) -> resources::Items<'_> {
        resources::Items::new(self)
    }

    /// Subitem operations.
    #[must_use]
    pub const fn subitems(&self) -> resources::Subitems<'_> {
        resources::Subitems::new(self)
    }

    /// Tag operations.
    #[must_use]
    pub const fn tags(&self) -> resources::Tags<'_> {
        resources::Tags::new(self)
    }

    /// Team operations.
    #[must_use]
    pub const fn teams(&self) -> resources::Teams<'_> {
        resources::Teams::new(self)
    }

    /// Update operations.
    #[must_use]
    pub const fn updates(&self) -> resources::Updates<'_> {
        resources::Updates::new(self)
    }

    /// User operations.
    #[must_use]
    pub const fn users(&self) -> resources::Users<'_> {
        resources::Users::new(self)
    }

    /// Workspace operations.
    #[must_use]
    pub const fn workspaces(&self) -> resources::Workspaces<'_> {
        resources::Workspaces::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    fn create_test_client() -> Client {
        let config = MondayConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap();
        Client::new(config)
    }

    #[test]
    fn test_client_uses_config_version() {
        let config = MondayConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .api_version(ApiVersion::V2025_01)
            .build()
            .unwrap();
        let client = Client::new(config);

        assert_eq!(client.api_version(), &ApiVersion::V2025_01);
    }

    #[test]
    fn test_client_defaults_to_latest_version() {
        let client = create_test_client();
        assert_eq!(client.api_version(), &ApiVersion::latest());
    }

    #[test]
    fn test_client_constructor_is_infallible() {
        // This compiles because new() returns Self, not Result
        let _client: Client = create_test_client();
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_resource_accessors_share_the_client() {
        let client = create_test_client();
        // Multiple accessors can coexist; they only borrow the client
        let _boards = client.boards();
        let _items = client.items();
        let _users = client.users();
    }
}
