//! Authentication for the Sima-land API.
//!
//! Two collaborators make up the token lifecycle:
//!
//! - [`TokenStore`]: a durable file-backed cache for one bearer token;
//!   pure I/O, no network.
//! - [`AuthClient`]: exchanges the configured login/password for a fresh
//!   token via the API's authentication endpoint.
//!
//! The REST client composes both: it adopts a cached token when available
//! and mints (then persists) a fresh one when the API reports the cached
//! token expired or revoked.

mod client;
mod token_store;

pub use client::{AuthClient, AuthError};
pub use token_store::{TokenStore, TOKEN_FILE_NAME};
