//! Error types for request execution.
//!
//! Only credential failure, malformed input, and infrastructure failures
//! are raised as errors. Ordinary non-2xx HTTP responses are returned as
//! [`Response`](crate::Response) values so callers can branch on status.

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::AuthError;

/// Error returned when a request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The entity path segment is empty.
    #[error("Request entity cannot be empty.")]
    EmptyEntity,
}

/// Unified error type for query execution.
///
/// # Example
///
/// ```rust,ignore
/// match client.get("item").await {
///     Ok(response) => println!("status {}", response.status),
///     Err(RestError::Auth(e)) => eprintln!("credentials rejected: {e}"),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// Credential failure: authentication failed, or a retried query
    /// still received 401.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A request failed validation before any network call.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A batch entry is not a valid request. Raised before any network
    /// call in the batch.
    #[error("Invalid batch entry '{key}': {source}")]
    BatchInput {
        /// The caller-chosen key of the offending entry.
        key: String,
        /// Why the entry is invalid.
        source: InvalidRequestError,
    },

    /// Network or connection error from the transport. Not retried.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Token persistence failed, typically because the configured token
    /// directory does not exist or is not writable.
    #[error("Token persistence failed at '{path}': {source}")]
    TokenStore {
        /// The token file path involved.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_input_error_names_the_key() {
        let error = RestError::BatchInput {
            key: "item1".to_string(),
            source: InvalidRequestError::EmptyEntity,
        };
        let message = error.to_string();
        assert!(message.contains("item1"));
        assert!(message.contains("entity cannot be empty"));
    }

    #[test]
    fn test_auth_error_is_transparent() {
        let error = RestError::Auth(AuthError::MissingToken);
        assert!(error.to_string().contains("token field"));
    }

    #[test]
    fn test_token_store_error_names_the_path() {
        let error = RestError::TokenStore {
            path: PathBuf::from("/missing/token.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(error.to_string().contains("/missing/token.txt"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &RestError::InvalidRequest(InvalidRequestError::EmptyEntity);
        let _ = error;
    }
}
