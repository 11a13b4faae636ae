//! # Sima-land API Rust client
//!
//! A client for the Sima-land authenticated REST API. It turns logical
//! operations into authenticated HTTP calls, transparently manages the
//! bearer token's lifecycle (acquisition, on-disk caching, invalidation,
//! one-shot retry), normalizes heterogeneous response bodies, and lets
//! callers dispatch several logical requests as one keyed batch.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for credentials and the API root URL
//! - A file-backed token cache ([`TokenStore`]) with refresh-on-401
//! - Best-effort response decoding with `items` envelope unwrapping
//! - Concurrent, fail-fast batch dispatch with preserved correlation keys
//!
//! ## Quick Start
//!
//! ```rust
//! use simaland_api::{ApiConfig, Login, Password};
//!
//! let config = ApiConfig::builder()
//!     .login(Login::new("user@example.com").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .token_path("/var/cache/simaland")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use simaland_api::{ApiConfig, HttpMethod, Request, RestClient};
//!
//! let client = RestClient::new(config);
//!
//! // Single query; non-2xx statuses are data, not errors
//! let response = client.get("item").await?;
//! if response.is_ok() {
//!     println!("items: {:?}", response.body.json());
//! } else {
//!     println!("server said {}", response.status);
//! }
//!
//! // Keyed batch, dispatched concurrently
//! let mut batch = std::collections::HashMap::new();
//! batch.insert(
//!     "item1".to_string(),
//!     Request::builder(HttpMethod::Get, "item")
//!         .get_param("id-mf", "2,0")
//!         .build()?,
//! );
//! let responses = client.batch_query(batch).await?;
//! ```
//!
//! ## Token Lifecycle
//!
//! The first query adopts the persisted token from `token_path` when one
//! exists. A 401 response discards it, mints a fresh token through the
//! authentication endpoint, persists it, and retries the call exactly
//! once; a second 401 fails with an authentication error. Concurrent
//! 401s from requests in flight trigger at most one authentication call.
//! [`RestClient::delete_token`] forces re-authentication on the next
//! query.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: credentials and requests validate on construction
//! - **Thread-safe**: the client is `Send + Sync` with a guarded token cell
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthClient, AuthError, TokenStore, TOKEN_FILE_NAME};
pub use config::{ApiConfig, ApiConfigBuilder, BaseUrl, Login, Password, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use rest::{
    HttpMethod, InvalidRequestError, Request, RequestBuilder, RequestOptions, Response,
    ResponseBody, RestClient, RestError, ITEMS_FIELD,
};
