//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated monday.com API token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `ApiToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use monday_api::ApiToken;
///
/// let token = ApiToken::new("my-api-token").unwrap();
/// assert_eq!(token.as_ref(), "my-api-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated API endpoint URL.
///
/// This newtype validates that the endpoint has an `http://` or `https://`
/// scheme and a non-empty host. A trailing slash is stripped so URL assembly
/// is consistent regardless of input form.
///
/// The default endpoint is the production monday.com GraphQL endpoint,
/// `https://api.monday.com/v2`. Overriding it is mainly useful for tests
/// and proxy setups.
///
/// # Example
///
/// ```rust
/// use monday_api::EndpointUrl;
///
/// let endpoint = EndpointUrl::new("https://api.monday.com/v2/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://api.monday.com/v2");
///
/// assert!(EndpointUrl::new("api.monday.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(String);

/// The production monday.com GraphQL API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.monday.com/v2";

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL does not have
    /// an `http://` or `https://` scheme, or has an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        let valid = rest.is_some_and(|rest| {
            let host = rest.split('/').next().unwrap_or("");
            !host.is_empty() && !host.contains(char::is_whitespace)
        });

        if !valid {
            return Err(ConfigError::InvalidEndpointUrl { url });
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl Default for EndpointUrl {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_rejects_empty() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_accepts_non_empty() {
        let token = ApiToken::new("abc123").unwrap();
        assert_eq!(token.as_ref(), "abc123");
    }

    #[test]
    fn test_api_token_debug_is_masked() {
        let token = ApiToken::new("super-secret-token").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "ApiToken(*****)");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_endpoint_url_default_is_production() {
        assert_eq!(EndpointUrl::default().as_ref(), "https://api.monday.com/v2");
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        let endpoint = EndpointUrl::new("https://api.monday.com/v2/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://api.monday.com/v2");
    }

    #[test]
    fn test_endpoint_url_accepts_http_for_local_testing() {
        let endpoint = EndpointUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(endpoint.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_endpoint_url_rejects_missing_scheme() {
        assert!(matches!(
            EndpointUrl::new("api.monday.com/v2"),
            Err(ConfigError::InvalidEndpointUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_url_rejects_empty_host() {
        assert!(matches!(
            EndpointUrl::new("https:///v2"),
            Err(ConfigError::InvalidEndpointUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_url_display_matches_as_ref() {
        let endpoint = EndpointUrl::new("https://example.com/graphql").unwrap();
        assert_eq!(endpoint.to_string(), endpoint.as_ref());
    }
}
