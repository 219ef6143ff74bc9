//! HTTP transport for monday.com API communication.
//!
//! This module provides the [`HttpClient`] type: a thin wrapper around
//! `reqwest` that issues one synchronous-per-call HTTP POST to the GraphQL
//! endpoint, applies the configured headers and timeouts, and classifies
//! the response. No retries happen here; every failure surfaces to the
//! caller.

use std::collections::HashMap;

use crate::clients::errors::{ApiError, MondayError};
use crate::clients::http_response::Response;
use crate::config::{ApiVersion, MondayConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the monday.com API.
///
/// The client handles:
/// - Endpoint and default-header construction from [`MondayConfig`]
/// - Connection (`open_timeout`) and read (`read_timeout`) timeouts
/// - POSTing the GraphQL request body `{"query": "..."}`
/// - Response parsing and error classification
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The GraphQL endpoint URL.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &MondayConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Monday API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.token().as_ref().to_string(),
        );
        default_headers.insert(
            "API-Version".to_string(),
            config.api_version().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.open_timeout())
            .timeout(config.read_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GraphQL query string to the API.
    ///
    /// Issues a single HTTP POST with the JSON body `{"query": "<query>"}`.
    /// When `version` is given it overrides the configured `API-Version`
    /// header for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if:
    /// - a network error occurs (`Network`)
    /// - the body is not valid JSON (`Parse`)
    /// - the response is non-success, including HTTP 200 with an
    ///   application-level error payload (`Api`, classified per the
    ///   status and error-code tables)
    pub async fn post_query(
        &self,
        query: &str,
        version: Option<&ApiVersion>,
    ) -> Result<Response, MondayError> {
        tracing::debug!(endpoint = %self.endpoint, "sending GraphQL query");

        let mut req_builder = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": query }));

        // reqwest appends on repeated header names, so the default
        // API-Version entry must be skipped when an override is present.
        for (key, value) in &self.default_headers {
            if version.is_some() && key == "API-Version" {
                continue;
            }
            req_builder = req_builder.header(key, value);
        }
        if let Some(version) = version {
            req_builder = req_builder.header("API-Version", version.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let response = Response::from_raw(status, headers, &body_text)?;

        if response.success() {
            Ok(response)
        } else {
            let error = ApiError::from_response(response);
            tracing::warn!(
                kind = %error.kind,
                status = error.status,
                code = error.code.as_deref().unwrap_or(""),
                "monday.com API returned an error"
            );
            Err(error.into())
        }
    }

    /// Parses response headers into a `HashMap`, lowercasing names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    fn create_test_config() -> MondayConfig {
        MondayConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.endpoint(), "https://api.monday.com/v2");
    }

    #[test]
    fn test_authorization_header_carries_token() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"test-token".to_string())
        );
    }

    #[test]
    fn test_api_version_header_is_set() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get("API-Version"),
            Some(&ApiVersion::latest().to_string())
        );
    }

    #[test]
    fn test_content_type_is_json() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Monday API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = MondayConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Monday API Library"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
