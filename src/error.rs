//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: a client is never constructed with credentials it
//! cannot authenticate with.
//!
//! # Example
//!
//! ```rust
//! use simaland_api::{ConfigError, Login};
//!
//! let result = Login::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyLogin)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`ApiConfig`](crate::ApiConfig).
///
/// Each variant carries a clear, actionable message. Configuration errors
/// are raised before any network activity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Login cannot be empty.
    #[error("Login cannot be empty. Please provide the account login for the Sima-land API.")]
    EmptyLogin,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the account password for the Sima-land API.")]
    EmptyPassword,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://www.sima-land.ru/api/v3/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_login_error_message() {
        let error = ConfigError::EmptyLogin;
        let message = error.to_string();
        assert!(message.contains("Login cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPassword;
        let _: &dyn std::error::Error = &error;
    }
}
