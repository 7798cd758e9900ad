//! Transport boundary for the Printify API client.
//!
//! The client depends only on the [`Transport`] trait: "send this request,
//! return status, headers and body". [`ReqwestTransport`] is the default
//! implementation; tests and embedders can supply their own.

use std::future::Future;

use crate::clients::errors::{HttpError, TransportError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends a single [`HttpRequest`] and returns the raw [`HttpResponse`].
///
/// Implementations must read the body to completion before returning so
/// that no connection or stream outlives the call. They must not retry.
pub trait Transport: Send + Sync {
    /// Performs one round trip.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a [`reqwest::Client`] using rustls.
///
/// Connection pooling, TLS, and redirects are handled by `reqwest`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a fresh rustls-backed `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the client cannot be created
    /// (for example, TLS initialization failure).
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(TransportError::from)?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, e.g. one with a custom timeout.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        async move {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            // Reading the body releases the connection back to the pool.
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse::new(status, headers, body))
        }
    }
}
