//! # Printify API Rust SDK
//!
//! A Rust SDK for the order-management part of the Printify REST API,
//! providing type-safe configuration, a single-round-trip HTTP client, and
//! typed order operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PrintifyConfig`] and [`PrintifyConfigBuilder`]
//! - Validated newtypes for the API key, base URL, and API version
//! - An async HTTP client with a pluggable [`Transport`]
//! - Typed order records and operations in [`rest::resources`]
//! - Distinct errors for request construction, transport, protocol, and
//!   decode failures via [`HttpError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use printify_api::{ApiKey, ApiVersion, PrintifyConfig};
//!
//! let config = PrintifyConfig::builder()
//!     .api_key(ApiKey::new("your-personal-access-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.printify.com/");
//! ```
//!
//! ## Working with Orders
//!
//! ```rust,ignore
//! use printify_api::{ApiKey, HttpClient, PrintifyConfig};
//! use printify_api::rest::resources::{Order, OrderListParams};
//!
//! let config = PrintifyConfig::builder()
//!     .api_key(ApiKey::new("your-personal-access-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! // List pending orders
//! let params = OrderListParams {
//!     status: Some("pending".to_string()),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, 42, &params).await?;
//!
//! // Submit a new order and release it to production
//! let submitted = new_order.submit(&client, 42).await?;
//! println!("created order {}", submitted.id());
//!
//! // Missing orders surface as a 404 protocol error
//! match Order::find(&client, 42, 7).await {
//!     Ok(order) => println!("{:?}", order.status),
//!     Err(error) if error.is_not_found() => println!("no such order"),
//!     Err(error) => return Err(error.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Configuration and clients are `Send + Sync`
//! - **One round trip per call**: No retries; every failure is returned
//! - **Absence is explicit**: Optional fields are `Option`, never zero values

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiVersion, BaseUrl, PrintifyConfig, PrintifyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponse, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    InvalidHttpRequestError, ReqwestTransport, RequestBuilder, Transport, TransportError,
};
