//! HTTP client for Printify API communication.
//!
//! This module provides the [`HttpClient`] type, which combines a
//! [`RequestBuilder`] with a [`Transport`] and classifies each response.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBuilder};
use crate::clients::http_response::ApiResponse;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::PrintifyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Printify API.
///
/// Each call performs exactly one round trip:
/// - status codes of 400 and above become [`HttpError::Protocol`] and the body
///   is not decoded
/// - other responses are decoded into the requested type, and a mismatch
///   becomes [`HttpError::Decode`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` whenever its transport is, and holds no
/// mutable state, so it can be shared across concurrent tasks.
///
/// # Example
///
/// ```rust,ignore
/// use printify_api::{ApiKey, HttpClient, HttpMethod, PrintifyConfig};
///
/// let config = PrintifyConfig::builder()
///     .api_key(ApiKey::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let shops: serde_json::Value = client
///     .get("shops.json", &[])
///     .await?
///     .into_data();
/// ```
#[derive(Debug)]
pub struct HttpClient<T = ReqwestTransport> {
    builder: RequestBuilder,
    transport: T,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient<ReqwestTransport> {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::RequestConstruction`] if configured header values
    /// are invalid, or [`HttpError::Transport`] if the `reqwest` client cannot
    /// be created.
    pub fn new(config: &PrintifyConfig) -> Result<Self, HttpError> {
        Self::with_transport(config, ReqwestTransport::new()?)
    }
}

impl<T: Transport> HttpClient<T> {
    /// Creates a client using the given transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::RequestConstruction`] if configured header values
    /// are invalid.
    pub fn with_transport(config: &PrintifyConfig, transport: T) -> Result<Self, HttpError> {
        tracing::debug!(
            "Creating Printify client for {} (API {})",
            config.base_url().as_ref(),
            config.api_version()
        );

        Ok(Self {
            builder: RequestBuilder::new(config)?,
            transport,
        })
    }

    /// Returns the request builder used by this client.
    #[must_use]
    pub const fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Returns the transport used by this client.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a prepared request once and decodes a successful body into `R`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Transport`] if the round trip fails
    /// - [`HttpError::Protocol`] if the status is 400 or above
    /// - [`HttpError::Decode`] if the body does not match `R`
    pub async fn invoke<R>(&self, request: HttpRequest) -> Result<ApiResponse<R>, HttpError>
    where
        R: DeserializeOwned,
    {
        let method = request.method;
        let url = request.url.clone();

        tracing::debug!("Sending {} {}", method, url);
        let response = self.transport.send(request).await?;
        tracing::debug!("Received {} from {} {}", response.status, method, url);

        if !response.is_success() {
            tracing::warn!(
                "Printify API request {} {} failed with status {} (request id: {})",
                method,
                url,
                response.status,
                response.request_id().unwrap_or("none")
            );
            tracing::debug!("Error body: {}", response.body_excerpt());
            return Err(HttpError::Protocol {
                status: response.status,
            });
        }

        let data = serde_json::from_slice::<R>(&response.body).map_err(|source| {
            tracing::warn!(
                "Could not decode response from {} {} (status {}): {}",
                method,
                url,
                response.status,
                source
            );
            HttpError::Decode {
                status: response.status,
                source,
            }
        })?;

        Ok(ApiResponse {
            status: response.status,
            headers: response.headers,
            data,
        })
    }

    /// Builds and sends a request in one step.
    ///
    /// # Errors
    ///
    /// Any error from [`RequestBuilder::build`] or [`HttpClient::invoke`].
    pub async fn request<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<ApiResponse<R>, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.builder.build(method, path, query, body)?;
        self.invoke(request).await
    }

    /// Sends a GET request without a body.
    ///
    /// # Errors
    ///
    /// Any error from [`HttpClient::request`].
    pub async fn get<R>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<R>, HttpError>
    where
        R: DeserializeOwned,
    {
        self.request::<(), R>(HttpMethod::Get, path, query, None).await
    }

    /// Sends a POST request, with a JSON body when `body` is `Some`.
    ///
    /// # Errors
    ///
    /// Any error from [`HttpClient::request`].
    pub async fn post<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<R>, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(HttpMethod::Post, path, &[], body).await
    }
}
