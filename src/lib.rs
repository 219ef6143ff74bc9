//! # monday.com API Rust Client
//!
//! A Rust client for the monday.com GraphQL API, providing type-safe
//! configuration, GraphQL query assembly, and an async HTTP client with
//! structured error classification.
//!
//! ## Overview
//!
//! This client provides:
//! - Type-safe configuration via [`MondayConfig`] and [`MondayConfigBuilder`]
//! - Validated newtypes for the API token and endpoint URL
//! - API version pinning with a per-request override
//! - GraphQL operation assembly from [`QueryArgs`] and [`SelectField`]
//!   selections via [`query::build_query`]
//! - Resource accessors for boards, items, columns, groups, updates, users,
//!   workspaces, and the rest of the platform surface
//! - Error classification from HTTP status codes and platform error codes
//!   into a closed [`ErrorKind`] taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use monday_api::{ApiToken, Client, MondayConfig};
//!
//! // Create configuration using the builder pattern
//! let config = MondayConfig::builder()
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(config);
//! ```
//!
//! ## Querying a Resource
//!
//! ```rust,ignore
//! use monday_api::{Client, QueryArgs};
//!
//! let args = QueryArgs::new().arg("ids", vec![1234]).arg("limit", 10);
//! let response = client.boards().query(args, None).await?;
//!
//! if response.success() {
//!     println!("{}", response.body);
//! }
//! ```
//!
//! ## Running a Mutation
//!
//! ```rust,ignore
//! use monday_api::{Client, QueryArgs};
//!
//! let args = QueryArgs::new()
//!     .arg("board_id", 1234)
//!     .arg("item_name", "new item");
//! let response = client.items().create(args, None).await?;
//! ```
//!
//! ## Error Handling
//!
//! Non-success responses are classified into [`ErrorKind`] from the HTTP
//! status and, when present, the platform's `error_code`:
//!
//! ```rust,ignore
//! use monday_api::{ErrorKind, MondayError};
//!
//! match client.boards().query(args, None).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(MondayError::Api(err)) if err.kind == ErrorKind::RateLimited => {
//!         // ComplexityException and HTTP 429 both land here; the raw
//!         // platform code is preserved in err.code.
//!         eprintln!("rate limited: {err}");
//!     }
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Transparent responses**: Bodies are returned as raw JSON rather than
//!   deserialized into per-resource structs

pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;

// Re-export public types at crate root for convenience
pub use clients::{ApiError, Client, ErrorKind, MondayError, Response};
pub use config::{ApiToken, ApiVersion, EndpointUrl, MondayConfig, MondayConfigBuilder};
pub use error::ConfigError;
pub use query::{select, QueryArgs, QueryValue, SelectField};
