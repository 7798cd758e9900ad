//! HTTP response types for the Printify API client.
//!
//! [`HttpResponse`] is what a [`Transport`](crate::clients::Transport) hands
//! back: a status, headers, and the fully read body. [`ApiResponse`] is what
//! the invoker returns after decoding that body into a typed value.

use reqwest::header::HeaderMap;

/// Longest body excerpt included in debug logs.
const LOG_BODY_LIMIT: usize = 512;

/// A raw response read to completion by a transport.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// The response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is below 400.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status < 400
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
    }

    /// Returns a lossy, truncated view of the body for logging.
    #[must_use]
    pub fn body_excerpt(&self) -> String {
        let text = String::from_utf8_lossy(&self.body);
        if text.chars().count() <= LOG_BODY_LIMIT {
            return text.into_owned();
        }
        let mut excerpt: String = text.chars().take(LOG_BODY_LIMIT).collect();
        excerpt.push_str("...");
        excerpt
    }
}

/// A successful response with its body decoded into `T`.
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// The decoded body.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Consumes the response, returning the decoded body.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Maps the decoded body, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }
}
