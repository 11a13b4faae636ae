//! Logical request description for the REST API.
//!
//! A [`Request`] names the target entity and carries its query and body
//! parameters; it knows nothing about tokens or transport. Use
//! [`Request::builder`] for the builder pattern, or [`Request::get`] for
//! the common case.

use std::collections::HashMap;
use std::fmt;

use crate::rest::errors::InvalidRequestError;

/// HTTP methods supported by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One logical call against the API.
///
/// Immutable once built. The entity is the path segment under the API
/// root (e.g. `"item"`, `"user"`); `get_params` merge into the query
/// string verbatim and `post_params` are serialized as the JSON body.
///
/// # Example
///
/// ```rust
/// use simaland_api::{HttpMethod, Request};
///
/// let request = Request::builder(HttpMethod::Get, "item")
///     .get_param("id-mf", "2,0")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.entity, "item");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The entity path segment this request targets.
    pub entity: String,
    /// Query parameters, merged into the URL verbatim.
    pub get_params: HashMap<String, String>,
    /// Body parameters, serialized as JSON when present.
    pub post_params: Option<serde_json::Value>,
}

impl Request {
    /// Creates a new builder for constructing a `Request`.
    #[must_use]
    pub fn builder(method: HttpMethod, entity: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, entity)
    }

    /// Shorthand for a GET request without parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if `entity` is empty.
    pub fn get(entity: impl Into<String>) -> Result<Self, InvalidRequestError> {
        Self::builder(HttpMethod::Get, entity).build()
    }

    /// Validates the request, ensuring it is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyEntity`] if the entity is empty.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.entity.is_empty() {
            return Err(InvalidRequestError::EmptyEntity);
        }
        Ok(())
    }
}

/// Builder for [`Request`] instances.
#[derive(Debug)]
pub struct RequestBuilder {
    method: HttpMethod,
    entity: String,
    get_params: HashMap<String, String>,
    post_params: Option<serde_json::Value>,
}

impl RequestBuilder {
    fn new(method: HttpMethod, entity: impl Into<String>) -> Self {
        Self {
            method,
            entity: entity.into(),
            get_params: HashMap::new(),
            post_params: None,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn get_params(mut self, params: HashMap<String, String>) -> Self {
        self.get_params = params;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn get_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.get_params.insert(key.into(), value.into());
        self
    }

    /// Sets the body parameters, serialized as JSON.
    #[must_use]
    pub fn post_params(mut self, params: impl Into<serde_json::Value>) -> Self {
        self.post_params = Some(params.into());
        self
    }

    /// Builds the [`Request`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<Request, InvalidRequestError> {
        let request = Request {
            method: self.method,
            entity: self.entity,
            get_params: self.get_params,
            post_params: self.post_params,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = Request::builder(HttpMethod::Get, "item")
            .get_param("foo", "bar")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.entity, "item");
        assert_eq!(request.get_params.get("foo"), Some(&"bar".to_string()));
        assert!(request.post_params.is_none());
    }

    #[test]
    fn test_builder_with_post_params() {
        let request = Request::builder(HttpMethod::Post, "order")
            .post_params(json!({"bar": "foo"}))
            .build()
            .unwrap();

        assert_eq!(request.post_params, Some(json!({"bar": "foo"})));
    }

    #[test]
    fn test_empty_entity_is_rejected() {
        let result = Request::builder(HttpMethod::Get, "").build();
        assert!(matches!(result, Err(InvalidRequestError::EmptyEntity)));
    }

    #[test]
    fn test_get_shorthand() {
        let request = Request::get("user").unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.entity, "user");
        assert!(request.get_params.is_empty());
    }

    #[test]
    fn test_verify_detects_manually_built_invalid_request() {
        let request = Request {
            method: HttpMethod::Get,
            entity: String::new(),
            get_params: HashMap::new(),
            post_params: None,
        };
        assert!(matches!(
            request.verify(),
            Err(InvalidRequestError::EmptyEntity)
        ));
    }
}
