//! HTTP client types for Printify API communication.
//!
//! This module provides the request/response pipeline used by every
//! resource operation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RequestBuilder`]: Turns method, relative path, query, and body into an [`HttpRequest`]
//! - [`Transport`]: The "send a request, get a response" boundary
//! - [`ReqwestTransport`]: The default `reqwest`-backed transport
//! - [`HttpClient`]: Sends requests once and classifies the outcome
//! - [`ApiResponse`]: A decoded success response
//! - [`HttpError`]: Unified error type for every failure
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::{ApiKey, PrintifyConfig};
//! use printify_api::clients::{HttpClient, HttpMethod};
//!
//! let config = PrintifyConfig::builder()
//!     .api_key(ApiKey::new("token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let request = client
//!     .request_builder()
//!     .build::<()>(HttpMethod::Get, "shops/42/orders.json", &[], None)?;
//! let response = client.invoke::<serde_json::Value>(request).await?;
//! println!("{}", response.data);
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call performs one round trip and returns the outcome.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, RequestBuilder, JSON_CONTENT_TYPE};
pub use http_response::{ApiResponse, HttpResponse};
pub use transport::{ReqwestTransport, Transport};

#[cfg(test)]
pub(crate) use http_client::tests as test_support;
