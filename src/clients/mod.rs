//! HTTP client functionality for the monday.com API.
//!
//! This module provides the transport and error-classification layer:
//!
//! - [`Client`]: the main API client with resource accessors and
//!   `make_request`
//! - [`HttpClient`]: the underlying reqwest wrapper
//! - [`Response`]: the immutable response wrapper with the `success`
//!   predicate
//! - [`MondayError`] / [`ApiError`] / [`ErrorKind`]: the error taxonomy
//!
//! # Error Handling Convention
//!
//! monday.com reports many application-level errors with HTTP 200 and an
//! error payload in the body. [`Client::make_request`] classifies those the
//! same way as HTTP error statuses, so callers see one unified
//! [`MondayError`] surface. The classified [`ApiError`] carries the fully
//! populated [`Response`] for inspection.

mod client;
mod errors;
mod http_client;
mod http_response;

pub use client::Client;
pub use errors::{ApiError, ErrorKind, MondayError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::Response;
