//! Credential-to-token exchange against the API's authentication endpoint.
//!
//! [`AuthClient`] is the trusted primitive the request-retry logic depends
//! on: it issues exactly one call carrying the configured credentials and
//! either yields a fresh bearer token or fails with [`AuthError`]. It never
//! retries and never recurses into the REST client's own retry path.

use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;

/// Path of the authentication endpoint under the API root.
const AUTH_PATH: &str = "auth";

/// Field of the authentication response carrying the bearer token.
const TOKEN_FIELD: &str = "jwt";

/// Request body for the authentication endpoint.
#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    login: &'a str,
    password: &'a str,
}

/// Errors from the credential exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authentication endpoint rejected the credentials.
    #[error("Authentication failed with status {status}: {body}")]
    Unauthorized {
        /// HTTP status of the rejection.
        status: u16,
        /// Raw response body, useful for diagnostics.
        body: String,
    },

    /// The response did not contain a usable token field.
    #[error("Authentication response did not contain a 'jwt' token field")]
    MissingToken,

    /// Network or connection failure while authenticating.
    #[error("Network error during authentication: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Exchanges the configured login/password for a fresh bearer token.
///
/// # Thread Safety
///
/// `AuthClient` is `Send + Sync` and cheap to clone; it shares the
/// underlying reqwest connection pool with the REST client.
#[derive(Clone, Debug)]
pub struct AuthClient {
    http: reqwest::Client,
    config: ApiConfig,
}

// Verify AuthClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthClient>();
};

impl AuthClient {
    /// Creates an auth client sharing `http` with its caller.
    #[must_use]
    pub fn new(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    /// Issues one authentication call and extracts the minted token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Unauthorized`] on any non-2xx status
    /// - [`AuthError::MissingToken`] when the decoded body has no string
    ///   `jwt` field
    /// - [`AuthError::Transport`] on network failure
    pub async fn authenticate(&self) -> Result<String, AuthError> {
        let url = self.config.base_url().join(AUTH_PATH);
        let body = AuthRequest {
            login: self.config.login().as_ref(),
            password: self.config.password().as_ref(),
        };

        let response = self
            .http
            .post(&url)
            .header("User-Agent", self.config.user_agent())
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        if !(200..=299).contains(&status) {
            return Err(AuthError::Unauthorized { status, body: text });
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&text).map_err(|_| AuthError::MissingToken)?;
        let token = parsed
            .get(TOKEN_FIELD)
            .and_then(serde_json::Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        tracing::debug!("minted new API token");
        Ok(token.to_string())
    }
}
