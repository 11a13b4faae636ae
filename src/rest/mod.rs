//! REST request execution for the Sima-land API.
//!
//! - [`Request`] / [`Response`]: the per-call data model
//! - [`RestClient`]: authenticated query execution with refresh-on-401
//!   retry and concurrent batch dispatch
//! - [`RestError`]: the unified execution error

pub mod client;
pub mod errors;
pub mod request;
pub mod response;

pub use client::{RequestOptions, RestClient};
pub use errors::{InvalidRequestError, RestError};
pub use request::{HttpMethod, Request, RequestBuilder};
pub use response::{Response, ResponseBody, ITEMS_FIELD};
