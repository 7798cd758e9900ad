//! HTTP-specific error types for the Printify API client.
//!
//! # Error Handling
//!
//! Every operation returns a single [`HttpError`], which separates:
//!
//! - [`HttpError::RequestConstruction`]: the request could not be built; nothing was sent
//! - [`HttpError::Serialization`]: the request body could not be encoded as JSON
//! - [`HttpError::Transport`]: the network call itself failed
//! - [`HttpError::Protocol`]: the API answered with a status of 400 or above
//! - [`HttpError::Decode`]: the API answered successfully but the body did not
//!   match the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::clients::HttpError;
//!
//! match Order::find(&client, 42, 1001).await {
//!     Ok(order) => println!("Status: {:?}", order.status),
//!     Err(e) if e.is_not_found() => println!("No such order"),
//!     Err(HttpError::Protocol { status }) => println!("API said no: {status}"),
//!     Err(HttpError::Decode { source, .. }) => println!("Unexpected payload: {source}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::error::Error as StdError;

use thiserror::Error;

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The relative path is empty, absolute, or contains illegal segments.
    #[error("Invalid relative path '{path}'. Expected '<collection>/<id-or-action>' without a leading slash, query, or fragment.")]
    InvalidPath {
        /// The path that was rejected.
        path: String,
    },

    /// A `{placeholder}` in a path template had no value.
    #[error("Path template '{template}' is missing a value for '{parameter}'.")]
    UnresolvedPathParameter {
        /// The template being expanded.
        template: &'static str,
        /// The placeholder left unresolved.
        parameter: String,
    },

    /// A configured value cannot be used as an HTTP header.
    #[error("Value for header '{header}' contains characters not allowed in HTTP headers.")]
    InvalidHeaderValue {
        /// The header name.
        header: &'static str,
    },

    /// The base URL cannot have path segments appended to it.
    #[error("Cannot append a path to base URL '{url}'.")]
    CannotBeABase {
        /// The base URL.
        url: String,
    },
}

/// Error returned when the transport fails to complete a round trip.
///
/// The underlying cause is kept opaque and exposed through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(#[source] Box<dyn StdError + Send + Sync>);

impl TransportError {
    /// Wraps any error produced by a transport implementation.
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self(Box::new(error))
    }
}

/// Unified error type for all request failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be built; it never reached the network.
    #[error("Invalid request: {0}")]
    RequestConstruction(#[from] InvalidHttpRequestError),

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    /// The API returned a status code of 400 or above.
    #[error("Printify API request failed with status: {status}")]
    Protocol {
        /// The HTTP status code.
        status: u16,
    },

    /// A success response body did not match the expected shape.
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        status: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol { status } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for a 404 protocol error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Protocol { status: 404 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("\"not a number\"").unwrap_err()
    }

    #[test]
    fn test_protocol_error_includes_status_code() {
        let error = HttpError::Protocol { status: 404 };
        assert_eq!(
            error.to_string(),
            "Printify API request failed with status: 404"
        );
        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_decode_error_is_distinct_from_protocol_error() {
        let error = HttpError::Decode {
            status: 200,
            source: json_error(),
        };
        assert_eq!(error.status(), Some(200));
        assert!(!error.is_not_found());
        assert!(error.to_string().contains("Failed to decode response body"));
        assert!(StdError::source(&error).is_some());
    }

    #[test]
    fn test_invalid_path_error_message() {
        let error = InvalidHttpRequestError::InvalidPath {
            path: "/absolute".to_string(),
        };
        assert!(error.to_string().contains("/absolute"));

        let wrapped: HttpError = error.into();
        assert!(matches!(wrapped, HttpError::RequestConstruction(_)));
        assert_eq!(wrapped.status(), None);
    }

    #[test]
    fn test_unresolved_parameter_error_message() {
        let error = InvalidHttpRequestError::UnresolvedPathParameter {
            template: "shops/{shop_id}/orders.json",
            parameter: "shop_id".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("shops/{shop_id}/orders.json"));
        assert!(message.contains("shop_id"));
    }

    #[test]
    fn test_transport_error_keeps_opaque_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error: HttpError = TransportError::new(cause).into();
        assert!(error.to_string().contains("Network error"));
        assert!(error.to_string().contains("refused"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn StdError = &HttpError::Protocol { status: 500 };
        let _: &dyn StdError = &InvalidHttpRequestError::InvalidHeaderValue {
            header: "authorization",
        };
        let _: &dyn StdError = &TransportError::new("boom");
    }
}
