//! HTTP request types for the Printify API client.
//!
//! This module provides the [`HttpRequest`] type and the [`RequestBuilder`]
//! that turns an operation (method, relative path, query, optional body) into
//! a fully addressed, fully headered request. Building a request never
//! touches the network.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;
use serde::Serialize;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::config::{ApiVersion, PrintifyConfig};

/// Content type sent with JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// HTTP methods used by the Printify API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
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

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request ready to hand to a [`Transport`](crate::clients::Transport).
///
/// Produced by [`RequestBuilder::build`]; plain data with no connection
/// attached.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL, including the query string if any.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// The UTF-8 JSON body, if any.
    pub body: Option<Vec<u8>>,
}

/// Builds [`HttpRequest`]s from a fixed base URL, version, and default headers.
///
/// The default headers (`Accept`, `User-Agent`, and the bearer
/// `Authorization`) are validated once at construction.
///
/// # Example
///
/// ```rust
/// use printify_api::{ApiKey, PrintifyConfig};
/// use printify_api::clients::{HttpMethod, RequestBuilder};
///
/// let config = PrintifyConfig::builder()
///     .api_key(ApiKey::new("token").unwrap())
///     .build()
///     .unwrap();
/// let builder = RequestBuilder::new(&config).unwrap();
///
/// let request = builder
///     .build::<()>(HttpMethod::Get, "shops/42/orders.json", &[], None)
///     .unwrap();
/// assert_eq!(
///     request.url.as_str(),
///     "https://api.printify.com/v1/shops/42/orders.json"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    base_url: Url,
    api_version: ApiVersion,
    default_headers: HeaderMap,
}

impl RequestBuilder {
    /// Creates a builder from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::RequestConstruction`] if the user agent or API key
    /// cannot be sent as an HTTP header value.
    pub fn new(config: &PrintifyConfig) -> Result<Self, HttpError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, header_value("user-agent", config.user_agent())?);

        let mut authorization = header_value(
            "authorization",
            &format!("Bearer {}", config.api_key().as_ref()),
        )?;
        authorization.set_sensitive(true);
        default_headers.insert(AUTHORIZATION, authorization);

        Ok(Self {
            base_url: config.base_url().as_url().clone(),
            api_version: config.api_version().clone(),
            default_headers,
        })
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Builds a request for `relative_path` under `<base>/<version>/`.
    ///
    /// Query pairs are appended in order; with none, the URL has no query
    /// string. When `body` is `Some`, it is encoded as JSON and a
    /// `Content-Type` header is added.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::RequestConstruction`] if the path is malformed,
    /// or [`HttpError::Serialization`] if the body cannot be encoded.
    pub fn build<B>(
        &self,
        method: HttpMethod,
        relative_path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<HttpRequest, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(relative_path, query)?;

        let mut headers = self.default_headers.clone();
        let body = match body {
            Some(value) => {
                let bytes = serde_json::to_vec(value).map_err(HttpError::Serialization)?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                Some(bytes)
            }
            None => None,
        };

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    fn resolve(&self, relative_path: &str, query: &[(&str, String)]) -> Result<Url, HttpError> {
        let segments = split_relative_path(relative_path)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| InvalidHttpRequestError::CannotBeABase {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .push(self.api_version.as_segment())
            .extend(segments);

        if !query.is_empty() {
            let query_string = query
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }
}

fn header_value(header: &'static str, value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value)
        .map_err(|_| InvalidHttpRequestError::InvalidHeaderValue { header }.into())
}

/// Splits a relative path into segments, rejecting anything that could
/// escape the versioned base (absolute paths, `..`, embedded URLs).
fn split_relative_path(path: &str) -> Result<Vec<&str>, InvalidHttpRequestError> {
    let invalid = || InvalidHttpRequestError::InvalidPath {
        path: path.to_string(),
    };

    if path.is_empty() || path.starts_with('/') || path.contains("://") || path.contains(['?', '#'])
    {
        return Err(invalid());
    }

    let segments: Vec<&str> = path.split('/').collect();
    if segments
        .iter()
        .any(|segment| segment.is_empty() || *segment == "." || *segment == "..")
    {
        return Err(invalid());
    }

    Ok(segments)
}
