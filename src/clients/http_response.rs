//! HTTP response wrapper for the monday.com API SDK.
//!
//! This module provides the [`Response`] type, an immutable record of one
//! API round trip: status code, parsed JSON body, and headers.

use std::collections::HashMap;

/// An HTTP response from the monday.com API.
///
/// Constructed once per call and immutable thereafter. The body is parsed
/// eagerly, so malformed JSON surfaces at construction time rather than on
/// first access.
///
/// # Success is more than 2xx
///
/// monday.com follows the common GraphQL convention of returning HTTP 200
/// alongside an application-level error payload. [`Response::success`]
/// therefore requires both a 2xx status **and** the absence of `errors` and
/// `error_message` top-level keys in the body. Callers must check
/// `success()`, not just `status`.
///
/// # Example
///
/// ```rust
/// use monday_api::Response;
/// use std::collections::HashMap;
///
/// let response =
///     Response::from_raw(200, HashMap::new(), r#"{"data":{"boards":[]}}"#).unwrap();
/// assert!(response.success());
///
/// let response =
///     Response::from_raw(200, HashMap::new(), r#"{"errors":[{"message":"bad"}]}"#).unwrap();
/// assert!(!response.success());
/// ```
#[derive(Clone, Debug)]
pub struct Response {
    /// The HTTP status code, read verbatim from the transport.
    pub status: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON response body.
    pub body: serde_json::Value,
}

impl Response {
    /// Creates a `Response` from a raw transport response, parsing the body.
    ///
    /// An empty body parses to an empty JSON object, which some endpoints
    /// return for no-content responses.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body text is non-empty and not
    /// valid JSON. Parse failures are propagated, not swallowed.
    pub fn from_raw(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body_text: &str,
    ) -> Result<Self, serde_json::Error> {
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(body_text)?
        };

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Creates a `Response` from an already-parsed body.
    #[must_use]
    pub const fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` iff the status is 2xx and the body carries no
    /// application-level error payload.
    ///
    /// The body is considered an error payload when it has an `errors` or
    /// `error_message` key at the top level.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status_ok() && !self.body_has_errors()
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn status_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns `true` if the body has an `errors` or `error_message`
    /// top-level key.
    #[must_use]
    pub fn body_has_errors(&self) -> bool {
        self.body.get("errors").is_some() || self.body.get("error_message").is_some()
    }

    /// Returns the API-reported error code (`error_code`), if present.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error_code").and_then(serde_json::Value::as_str)
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched as stored (the transport layer lowercases
    /// them on receipt).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
