//! Response wrapper with best-effort body decoding.
//!
//! Success bodies from the API are JSON objects that often wrap the
//! effective payload in an `items` envelope. [`Response::from_raw`]
//! applies the decoding rule once, at construction; the raw transport
//! body is always preserved alongside.

/// Field name of the payload envelope in decoded bodies.
pub const ITEMS_FIELD: &str = "items";

/// Best-effort decoded response body.
///
/// The "maybe structured, maybe raw" cases are kept apart as a tagged
/// result so callers branch explicitly instead of probing an empty value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// The raw body parsed as JSON, with the `items` envelope unwrapped
    /// when present.
    Decoded(serde_json::Value),
    /// The raw body was not valid JSON; only
    /// [`Response::raw_body`](Response) is meaningful.
    Raw,
}

impl ResponseBody {
    /// Returns the decoded value, or `None` for a raw body.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Decoded(value) => Some(value),
            Self::Raw => None,
        }
    }

    /// Returns `true` when the body failed to decode.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw)
    }
}

/// One response from the API.
///
/// Produced per request, immutable. Non-2xx statuses are data, not
/// errors; callers branch on [`Response::status`].
///
/// # Example
///
/// ```rust
/// use simaland_api::Response;
///
/// let response = Response::from_raw(200, r#"{"items": {"foo": "bar"}}"#.to_string());
/// assert_eq!(
///     response.body.json(),
///     Some(&serde_json::json!({"foo": "bar"}))
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The exact body returned by the transport.
    pub raw_body: String,
    /// Best-effort decoded body.
    pub body: ResponseBody,
}

impl Response {
    /// Wraps a transport result, applying the decoding rule.
    ///
    /// If `raw_body` parses as JSON and the top level is an object with an
    /// `items` field, the body is that nested value (envelope unwrapping);
    /// if it parses without `items`, the body is the full parsed value;
    /// otherwise the body is [`ResponseBody::Raw`].
    #[must_use]
    pub fn from_raw(status: u16, raw_body: String) -> Self {
        let body = serde_json::from_str::<serde_json::Value>(&raw_body).map_or(
            ResponseBody::Raw,
            |parsed| match parsed.get(ITEMS_FIELD) {
                Some(items) => ResponseBody::Decoded(items.clone()),
                None => ResponseBody::Decoded(parsed),
            },
        );
        Self {
            status,
            raw_body,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}
