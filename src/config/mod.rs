//! Configuration types for the Printify API client.
//!
//! This module provides the configuration used to construct an
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PrintifyConfig`]: The immutable configuration bundle
//! - [`PrintifyConfigBuilder`]: A builder for constructing [`PrintifyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL
//! - [`ApiVersion`]: The Printify API version to use
//!
//! # Example
//!
//! ```rust
//! use printify_api::{PrintifyConfig, ApiKey, ApiVersion};
//!
//! let config = PrintifyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, BaseUrl, DEFAULT_BASE_URL};
pub use version::ApiVersion;

use crate::clients::SDK_VERSION;
use crate::error::ConfigError;

/// Configuration for the Printify API client.
///
/// Holds the base URL, API version, user agent, and API key. It is
/// immutable once built, so several independently configured clients can
/// coexist in one process.
///
/// # Thread Safety
///
/// `PrintifyConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use printify_api::{PrintifyConfig, ApiKey, BaseUrl};
///
/// let config = PrintifyConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .base_url(BaseUrl::new("https://api.printify.com").unwrap())
///     .user_agent("my-shop-sync/2.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent(), "my-shop-sync/2.0");
/// ```
#[derive(Clone, Debug)]
pub struct PrintifyConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent: String,
}

impl PrintifyConfig {
    /// Creates a new builder for constructing a `PrintifyConfig`.
    #[must_use]
    pub fn builder() -> PrintifyConfigBuilder {
        PrintifyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

// Verify PrintifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintifyConfig>();
};

/// Returns the default user agent, `printify-api-rust v<crate version>`.
#[must_use]
pub fn default_user_agent() -> String {
    format!("printify-api-rust v{SDK_VERSION}")
}

/// Builder for constructing [`PrintifyConfig`] instances.
///
/// Only `api_key` is required.
///
/// # Defaults
///
/// - `base_url`: `https://api.printify.com`
/// - `api_version`: [`ApiVersion::latest()`]
/// - `user_agent`: `printify-api-rust v<crate version>`
#[derive(Debug, Default)]
pub struct PrintifyConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent: Option<String>,
}

impl PrintifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the [`PrintifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidApiVersion`] if a custom version is not a
    /// valid path segment.
    pub fn build(self) -> Result<PrintifyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_version = self.api_version.unwrap_or_else(ApiVersion::latest);
        api_version.validate()?;

        Ok(PrintifyConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            api_version,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}
