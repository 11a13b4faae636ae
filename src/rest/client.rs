//! REST client for the Sima-land API.
//!
//! This module provides the [`RestClient`] type, which composes the
//! [`AuthClient`], the [`TokenStore`], and a reqwest transport into
//! authenticated query execution with a bounded refresh-on-401 retry.

use std::collections::HashMap;
use std::path::Path;

use tokio::sync::Mutex;

use crate::auth::{AuthClient, AuthError, TokenStore};
use crate::config::ApiConfig;
use crate::rest::errors::RestError;
use crate::rest::request::{HttpMethod, Request};
use crate::rest::response::Response;

/// Transport options for one call, built from a request and the current
/// token.
///
/// Construction is pure: same request plus same token always yields
/// identical options. Body parameters are not part of the options; they
/// travel separately as the call body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    /// Outbound headers, including `Authorization` when a token is known.
    pub headers: HashMap<String, String>,
    /// Query parameters, copied verbatim from the request.
    pub query: HashMap<String, String>,
}

/// Client for the Sima-land REST API.
///
/// Executes single queries with transparent token management (on-disk
/// cache, refresh on 401, exactly one retry) and dispatches keyed batches
/// concurrently.
///
/// The in-memory token is a guarded shared cell: all reads and refreshes
/// go through a mutex, so concurrent 401s from requests in flight trigger
/// at most one authentication call; later waiters reuse the freshly
/// minted token.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use simaland_api::{ApiConfig, Login, Password, RestClient};
///
/// let config = ApiConfig::builder()
///     .login(Login::new("user").unwrap())
///     .password(Password::new("secret").unwrap())
///     .token_path("/var/cache/simaland")
///     .build()?;
///
/// let client = RestClient::new(config);
/// let response = client.get("item").await?;
/// if response.is_ok() {
///     println!("items: {:?}", response.body.json());
/// }
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Immutable client configuration.
    config: ApiConfig,
    /// Credential exchange against the authentication endpoint.
    auth: AuthClient,
    /// Durable token cache.
    store: TokenStore,
    /// In-memory token cell, guarding refresh against concurrent 401s.
    token: Mutex<Option<String>>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new client from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        let auth = AuthClient::new(http.clone(), config.clone());
        let store = TokenStore::new(config.token_path());

        Self {
            http,
            config,
            auth,
            store,
            token: Mutex::new(None),
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns the currently held in-memory token, if any.
    pub async fn current_token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    /// Builds the transport options for `request` under `token`.
    ///
    /// Pure; exposed for inspection and testing independent of execution.
    /// When `token` is `None` the `Authorization` header is simply absent
    /// and the server will reject the call with 401.
    #[must_use]
    pub fn build_options(&self, request: &Request, token: Option<&str>) -> RequestOptions {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), self.config.user_agent());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = token {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }

        RequestOptions {
            headers,
            query: request.get_params.clone(),
        }
    }

    /// Convenience for a GET query without parameters.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn get(&self, entity: &str) -> Result<Response, RestError> {
        self.query(HttpMethod::Get, entity, HashMap::new()).await
    }

    /// Executes one logical query against `entity`.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`]; additionally fails with
    /// [`RestError::InvalidRequest`] when `entity` is empty.
    pub async fn query(
        &self,
        method: HttpMethod,
        entity: &str,
        get_params: HashMap<String, String>,
    ) -> Result<Response, RestError> {
        let request = Request::builder(method, entity)
            .get_params(get_params)
            .build()?;
        self.execute(&request).await
    }

    /// Executes `request`, refreshing the token and retrying exactly once
    /// on an unauthorized response.
    ///
    /// Any status other than 401 on the first or retried attempt is
    /// returned as a [`Response`], including non-2xx statuses; callers
    /// branch on [`Response::status`].
    ///
    /// # Errors
    ///
    /// - [`RestError::Auth`] when authentication fails or the retried
    ///   call still receives 401; no third attempt is made
    /// - [`RestError::Transport`] on network failure, not retried
    /// - [`RestError::TokenStore`] when token persistence fails
    pub async fn execute(&self, request: &Request) -> Result<Response, RestError> {
        request.verify()?;

        let token = self.load_token().await?;
        let response = self.send(request, token.as_deref()).await?;
        if response.status != 401 {
            return Ok(response);
        }

        let fresh = self.refresh_token(token.as_deref()).await?;
        let retried = self.send(request, Some(&fresh)).await?;
        if retried.status == 401 {
            tracing::warn!(entity = %request.entity, "request unauthorized after token refresh");
            return Err(RestError::Auth(AuthError::Unauthorized {
                status: 401,
                body: retried.raw_body,
            }));
        }
        Ok(retried)
    }

    /// Dispatches a keyed batch of requests concurrently.
    ///
    /// Every entry is validated before any network call; each request
    /// then runs through the same single-query path as [`Self::execute`],
    /// carrying its own refresh-retry cycle. The output map is keyed
    /// identically to the input. No guarantee is made about the order in
    /// which the underlying calls are issued.
    ///
    /// # Errors
    ///
    /// - [`RestError::BatchInput`] when any entry fails validation;
    ///   raised eagerly, the whole batch is rejected
    /// - On the first non-recoverable error from any request the batch
    ///   aborts (fail-fast) rather than producing a partial result
    pub async fn batch_query(
        &self,
        requests: HashMap<String, Request>,
    ) -> Result<HashMap<String, Response>, RestError> {
        for (key, request) in &requests {
            request.verify().map_err(|source| RestError::BatchInput {
                key: key.clone(),
                source,
            })?;
        }

        let dispatches = requests.into_iter().map(|(key, request)| async move {
            let response = self.execute(&request).await?;
            Ok::<_, RestError>((key, response))
        });
        let responses = futures::future::try_join_all(dispatches).await?;
        Ok(responses.into_iter().collect())
    }

    /// Clears both the in-memory token and the persisted file, forcing
    /// re-authentication on the next query.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::TokenStore`] when the persisted file exists
    /// but cannot be removed.
    pub async fn delete_token(&self) -> Result<(), RestError> {
        let mut guard = self.token.lock().await;
        *guard = None;
        self.store.delete().map_err(|err| self.store_error(err))
    }

    /// Loads the in-memory token, adopting the persisted one when the
    /// cell is empty.
    async fn load_token(&self) -> Result<Option<String>, RestError> {
        let mut guard = self.token.lock().await;
        if guard.is_none() {
            if let Some(persisted) = self.store.read().map_err(|err| self.store_error(err))? {
                tracing::debug!("adopted persisted API token");
                *guard = Some(persisted);
            }
        }
        Ok(guard.clone())
    }

    /// Discards `stale`, mints a fresh token, and persists it.
    ///
    /// Runs entirely under the token lock: concurrent 401s line up here,
    /// and a waiter that finds the cell already holding a token different
    /// from its own stale one reuses it instead of re-authenticating.
    async fn refresh_token(&self, stale: Option<&str>) -> Result<String, RestError> {
        let mut guard = self.token.lock().await;
        if let Some(current) = guard.as_deref() {
            if Some(current) != stale {
                return Ok(current.to_string());
            }
        }

        *guard = None;
        self.store.delete().map_err(|err| self.store_error(err))?;
        let fresh = self.auth.authenticate().await?;
        self.store
            .write(&fresh)
            .map_err(|err| self.store_error(err))?;
        *guard = Some(fresh.clone());
        tracing::debug!("refreshed API token after unauthorized response");
        Ok(fresh)
    }

    /// Sends one transport call and wraps the result.
    async fn send(&self, request: &Request, token: Option<&str>) -> Result<Response, RestError> {
        let options = self.build_options(request, token);
        let url = self.config.base_url().join(&request.entity);

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };
        for (key, value) in &options.headers {
            builder = builder.header(key, value);
        }
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &request.post_params {
            builder = builder.json(body);
        }

        let result = builder.send().await?;
        let status = result.status().as_u16();
        let text = result.text().await.unwrap_or_default();
        Ok(Response::from_raw(status, text))
    }

    fn store_error(&self, source: std::io::Error) -> RestError {
        RestError::TokenStore {
            path: self
                .store
                .file_path()
                .map_or_else(Default::default, Path::to_path_buf),
            source,
        }
    }
}
