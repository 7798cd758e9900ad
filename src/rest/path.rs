//! Path building infrastructure for REST resources.
//!
//! Each resource declares one [`ResourcePath`] per operation, pairing the
//! HTTP method with a path template such as
//! `shops/{shop_id}/orders/{order_id}.json`. Operations expand their entry
//! with [`build_path`].
//!
//! # Example
//!
//! ```rust
//! use printify_api::rest::{build_path, ResourceOperation, ResourcePath};
//! use printify_api::HttpMethod;
//!
//! const FIND: ResourcePath = ResourcePath::new(
//!     HttpMethod::Get,
//!     ResourceOperation::Find,
//!     &["shop_id", "order_id"],
//!     "shops/{shop_id}/orders/{order_id}.json",
//! );
//!
//! let url = build_path(FIND.template, &[("shop_id", 42), ("order_id", 7)]).unwrap();
//! assert_eq!(url, "shops/42/orders/7.json");
//! ```

use std::fmt::Display;

use crate::clients::{HttpMethod, InvalidHttpRequestError};

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List resources (GET collection).
    All,
    /// Find a single resource by ID.
    Find,
    /// Create a resource (POST collection).
    Create,
    /// Hand an existing resource to production.
    SendToProduction,
    /// Estimate shipping costs for an unsaved resource.
    CalculateShipping,
    /// Cancel an existing resource.
    Cancel,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Find => "find",
            Self::Create => "create",
            Self::SendToProduction => "send_to_production",
            Self::CalculateShipping => "calculate_shipping",
            Self::Cancel => "cancel",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{name}` placeholders, filled by [`build_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["shop_id", "order_id"]`).
    pub ids: &'static [&'static str],
    /// The path template, relative to the versioned base URL.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }
}

/// Builds a relative path from a template by interpolating IDs.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::UnresolvedPathParameter`] if a
/// placeholder is left without a value.
pub fn build_path<V: Display>(
    template: &'static str,
    ids: &[(&str, V)],
) -> Result<String, InvalidHttpRequestError> {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    if let Some(start) = result.find('{') {
        let parameter = result[start + 1..]
            .split('}')
            .next()
            .unwrap_or_default()
            .to_string();
        return Err(InvalidHttpRequestError::UnresolvedPathParameter {
            template,
            parameter,
        });
    }

    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
