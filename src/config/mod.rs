//! Configuration types for the monday.com API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with monday.com.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MondayConfig`]: The main configuration struct holding all SDK settings
//! - [`MondayConfigBuilder`]: A builder for constructing [`MondayConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`EndpointUrl`]: A validated API endpoint URL
//! - [`ApiVersion`]: The monday.com API version to use
//!
//! There is no process-global configuration: a config is built once and
//! passed to [`Client::new`](crate::Client::new). Per-call overrides are
//! available on the client itself.
//!
//! # Example
//!
//! ```rust
//! use monday_api::{MondayConfig, ApiToken, ApiVersion};
//!
//! let config = MondayConfig::builder()
//!     .token(ApiToken::new("my-api-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, EndpointUrl, DEFAULT_ENDPOINT};
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::time::Duration;

/// Default connection (open) timeout in seconds.
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Default read timeout in seconds.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the monday.com API SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the API token, API version, endpoint, and request timeouts.
///
/// # Thread Safety
///
/// `MondayConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use monday_api::{MondayConfig, ApiToken};
/// use std::time::Duration;
///
/// let config = MondayConfig::builder()
///     .token(ApiToken::new("my-api-token").unwrap())
///     .read_timeout(Duration::from_secs(60))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.read_timeout(), Duration::from_secs(60));
/// ```
#[derive(Clone, Debug)]
pub struct MondayConfig {
    token: ApiToken,
    api_version: ApiVersion,
    endpoint: EndpointUrl,
    open_timeout: Duration,
    read_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl MondayConfig {
    /// Creates a new builder for constructing a `MondayConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_api::{MondayConfig, ApiToken};
    ///
    /// let config = MondayConfig::builder()
    ///     .token(ApiToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> MondayConfigBuilder {
        MondayConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the connection (open) timeout.
    #[must_use]
    pub const fn open_timeout(&self) -> Duration {
        self.open_timeout
    }

    /// Returns the read timeout.
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MondayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MondayConfig>();
};

/// Builder for constructing [`MondayConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `token`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `endpoint`: `https://api.monday.com/v2`
/// - `open_timeout`: 10 seconds
/// - `read_timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use monday_api::{MondayConfig, ApiToken, ApiVersion, EndpointUrl};
///
/// let config = MondayConfig::builder()
///     .token(ApiToken::new("token").unwrap())
///     .api_version(ApiVersion::V2025_04)
///     .endpoint(EndpointUrl::new("https://api.monday.com/v2").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MondayConfigBuilder {
    token: Option<ApiToken>,
    api_version: Option<ApiVersion>,
    endpoint: Option<EndpointUrl>,
    open_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MondayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the connection (open) timeout.
    #[must_use]
    pub const fn open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = Some(timeout);
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MondayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<MondayConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(MondayConfig {
            token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            endpoint: self.endpoint.unwrap_or_default(),
            open_timeout: self.open_timeout.unwrap_or(DEFAULT_OPEN_TIMEOUT),
            read_timeout: self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
