//! Configuration types for the Sima-land API client.
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: the immutable configuration owned by the client
//! - [`ApiConfigBuilder`]: a builder for constructing [`ApiConfig`] instances
//! - [`Login`] / [`Password`]: validated credential newtypes
//! - [`BaseUrl`]: a validated API root URL
//!
//! # Example
//!
//! ```rust
//! use simaland_api::{ApiConfig, Login, Password};
//!
//! let config = ApiConfig::builder()
//!     .login(Login::new("user").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .token_path("/var/cache/simaland")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://www.sima-land.ru/api/v3");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Login, Password};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default API root when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.sima-land.ru/api/v3";

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the Sima-land API client.
///
/// Immutable after construction. `login` and `password` are guaranteed
/// non-empty for the lifetime of the config; the client never operates
/// unauthenticated.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: BaseUrl,
    login: Login,
    password: Password,
    token_path: Option<PathBuf>,
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the account login.
    #[must_use]
    pub const fn login(&self) -> &Login {
        &self.login
    }

    /// Returns the account password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the directory configured for token persistence, if any.
    ///
    /// `None` means the token is held in memory only for the lifetime of
    /// the process.
    #[must_use]
    pub fn token_path(&self) -> Option<&std::path::Path> {
        self.token_path.as_deref()
    }

    /// Returns the configured User-Agent prefix, if any.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the full User-Agent value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> String {
        let prefix = self
            .user_agent_prefix
            .as_deref()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        format!("{prefix}Sima-land api-rust-client/{CLIENT_VERSION}")
    }
}

/// Builder for [`ApiConfig`] instances.
///
/// `login` and `password` are required; everything else has a default.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    login: Option<Login>,
    password: Option<Password>,
    token_path: Option<PathBuf>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API root URL. Defaults to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the account login (required).
    #[must_use]
    pub fn login(mut self, login: Login) -> Self {
        self.login = Some(login);
        self
    }

    /// Sets the account password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the directory used to persist the bearer token between runs.
    #[must_use]
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Sets a prefix for the outbound User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogin`] or [`ConfigError::EmptyPassword`]
    /// if the corresponding credential was never set.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };
        let login = self.login.ok_or(ConfigError::EmptyLogin)?;
        let password = self.password.ok_or(ConfigError::EmptyPassword)?;

        Ok(ApiConfig {
            base_url,
            login,
            password,
            token_path: self.token_path,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
