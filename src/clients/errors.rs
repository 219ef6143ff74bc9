//! Error classification and typed errors for API operations.
//!
//! This module contains the error taxonomy for monday.com API calls. Two
//! static lookup tables are the single source of truth for classification:
//! one keyed by HTTP status code, one keyed by the API's own error codes
//! (which arrive with HTTP 200 on this platform).
//!
//! # Error Handling
//!
//! - [`ApiError`]: a classified API failure, carrying the [`ErrorKind`],
//!   the original status/code/message, and the full [`Response`] so callers
//!   can inspect the error payload
//! - [`MondayError`]: unified error type for all client operations, also
//!   wrapping network and JSON parse failures
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::{MondayError, ErrorKind};
//!
//! match client.make_request(&query).await {
//!     Ok(response) => println!("data: {}", response.body["data"]),
//!     Err(MondayError::Api(e)) if e.kind == ErrorKind::RateLimited => {
//!         println!("slow down: {}", e.message);
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use crate::clients::http_response::Response;
use std::fmt;
use thiserror::Error;

/// A closed category of API failure.
///
/// Classification is table-driven and deterministic; anything the tables
/// do not recognize falls back to [`ErrorKind::Generic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Authentication or permission failure (401/403).
    Unauthorized,
    /// Malformed or otherwise rejected request (400).
    InvalidRequest,
    /// Rate or complexity budget exhausted (429).
    RateLimited,
    /// The addressed resource does not exist (404).
    NotFound,
    /// The platform failed internally (500).
    ServerError,
    /// Anything the tables do not recognize.
    Generic,
}

/// Status-code classification table. First match wins; scanned once.
const STATUS_TABLE: &[(u16, ErrorKind)] = &[
    (500, ErrorKind::ServerError),
    (429, ErrorKind::RateLimited),
    (404, ErrorKind::NotFound),
    (403, ErrorKind::Unauthorized),
    (401, ErrorKind::Unauthorized),
    (400, ErrorKind::InvalidRequest),
];

/// API error-code classification table: code -> (kind, canonical status).
///
/// These are the error codes monday.com reports in the `error_code` body
/// field, usually alongside an HTTP 200 status.
const API_CODE_TABLE: &[(&str, ErrorKind, u16)] = &[
    ("ComplexityException", ErrorKind::RateLimited, 429),
    ("UserUnauthorizedException", ErrorKind::Unauthorized, 403),
    ("ResourceNotFoundException", ErrorKind::NotFound, 404),
    ("InvalidUserIdException", ErrorKind::InvalidRequest, 400),
    ("InvalidVersionException", ErrorKind::InvalidRequest, 400),
    ("InvalidColumnIdException", ErrorKind::InvalidRequest, 400),
    ("InvalidItemIdException", ErrorKind::InvalidRequest, 400),
    ("InvalidBoardIdException", ErrorKind::InvalidRequest, 400),
    ("InvalidArgumentException", ErrorKind::InvalidRequest, 400),
    ("CreateBoardException", ErrorKind::InvalidRequest, 400),
    ("ItemsLimitationException", ErrorKind::InvalidRequest, 400),
    ("ItemNameTooLongException", ErrorKind::InvalidRequest, 400),
    ("ColumnValueException", ErrorKind::InvalidRequest, 400),
    ("CorrectedValueException", ErrorKind::InvalidRequest, 400),
];

impl ErrorKind {
    /// Classifies an HTTP status code.
    ///
    /// Exact-match lookup over the status table; any code the table does
    /// not list maps to [`ErrorKind::Generic`]. Pure and deterministic.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(Self::Generic, |(_, kind)| *kind)
    }

    /// Classifies an API-reported error code.
    ///
    /// Returns the kind and the canonical HTTP status for that code.
    /// Unknown codes map to `(Generic, 400)`. Pure and deterministic.
    #[must_use]
    pub fn from_api_code(code: &str) -> (Self, u16) {
        API_CODE_TABLE
            .iter()
            .find(|(name, _, _)| *name == code)
            .map_or((Self::Generic, 400), |(_, kind, status)| (*kind, *status))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthorized => "unauthorized",
            Self::InvalidRequest => "invalid request",
            Self::RateLimited => "rate limited",
            Self::NotFound => "not found",
            Self::ServerError => "server error",
            Self::Generic => "error",
        };
        f.write_str(name)
    }
}

/// A classified API failure.
///
/// Carries the classification result plus everything the response reported:
/// the canonical status, the original API error code (when the platform
/// sent one), a human-readable message, and the fully populated
/// [`Response`] so callers can inspect the error payload and headers even
/// though the call surfaced as an error.
///
/// Complexity exhaustion (`code == Some("ComplexityException")`) classifies
/// as [`ErrorKind::RateLimited`] with canonical status 429; the preserved
/// `code` keeps it distinguishable from plain rate limiting.
#[derive(Debug, Error)]
#[error("{kind} ({status}): {message}")]
pub struct ApiError {
    /// The classified kind of failure.
    pub kind: ErrorKind,
    /// Canonical HTTP status for this failure. For API-code classified
    /// errors this is the table's canonical status, which may differ from
    /// the transport status (the platform reports many errors with 200).
    pub status: u16,
    /// The API-reported error code, when present.
    pub code: Option<String>,
    /// Human-readable error message.
    pub message: String,
    /// The full response the error was classified from.
    pub response: Response,
}

impl ApiError {
    /// Classifies a non-success response into a typed error.
    ///
    /// When the body carries an `error_code`, the API-code table decides
    /// the kind and canonical status. Otherwise the HTTP status table
    /// decides, and the message is drawn from the body's `errors` or
    /// `error_message` fields when available.
    #[must_use]
    pub fn from_response(response: Response) -> Self {
        let code = response.error_code().map(String::from);

        let (kind, status) = code.as_deref().map_or_else(
            || (ErrorKind::from_status(response.status), response.status),
            ErrorKind::from_api_code,
        );

        let message = Self::extract_message(&response);

        Self {
            kind,
            status,
            code,
            message,
            response,
        }
    }

    /// Pulls the most specific message the body offers.
    fn extract_message(response: &Response) -> String {
        if let Some(message) = response
            .body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
        {
            return message.to_string();
        }

        if let Some(errors) = response.body.get("errors").and_then(serde_json::Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| {
                    e.as_str()
                        .or_else(|| e.get("message").and_then(serde_json::Value::as_str))
                })
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }

        format!("the monday.com API returned status {}", response.status)
    }
}

/// Unified error type for all client operations.
///
/// This enum provides a single error type at the API boundary. Use pattern
/// matching to handle specific failures.
///
/// # Example
///
/// ```rust,ignore
/// match client.make_request(&query).await {
///     Ok(response) => { /* inspect response.body */ }
///     Err(MondayError::Api(e)) => { /* classified API failure */ }
///     Err(MondayError::Network(e)) => { /* transport failure */ }
///     Err(MondayError::Parse(e)) => { /* malformed body */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum MondayError {
    /// A classified API failure (HTTP error status, or 200 with an
    /// application-level error payload).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or connection error, surfaced unmodified from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON. Fails fast, not recovered.
    #[error("Failed to parse response body as JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
