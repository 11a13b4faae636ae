//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that invalid
//! values are rejected with clear error messages instead of surfacing later
//! as rejected API calls.

use std::fmt;

use crate::error::ConfigError;

/// A validated account login.
///
/// # Example
///
/// ```rust
/// use simaland_api::Login;
///
/// let login = Login::new("user@example.com").unwrap();
/// assert_eq!(login.as_ref(), "user@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    /// Creates a new validated login.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogin`] if the login is empty.
    pub fn new(login: impl Into<String>) -> Result<Self, ConfigError> {
        let login = login.into();
        if login.is_empty() {
            return Err(ConfigError::EmptyLogin);
        }
        Ok(Self(login))
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated account password.
///
/// The [`Debug`] implementation masks the value to prevent accidental
/// exposure in logs.
///
/// # Example
///
/// ```rust
/// use simaland_api::Password;
///
/// let password = Password::new("secret").unwrap();
/// assert_eq!(format!("{password:?}"), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(*****)")
    }
}

/// A validated API base URL.
///
/// Trailing slashes are trimmed on construction so path joining is uniform.
///
/// # Example
///
/// ```rust
/// use simaland_api::BaseUrl;
///
/// let url = BaseUrl::new("https://www.sima-land.ru/api/v3/").unwrap();
/// assert_eq!(url.as_ref(), "https://www.sima-land.ru/api/v3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not carry an
    /// `http://` or `https://` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    /// Joins an API path segment onto the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
