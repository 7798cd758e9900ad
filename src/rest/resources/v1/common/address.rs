//! Recipient address for orders.

use serde::{Deserialize, Serialize};

/// The address an order is shipped to (`address_to`).
///
/// All fields are optional so partial addresses returned by the API decode
/// cleanly. Printify requires most of them when submitting an order.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::resources::v1::common::Address;
///
/// let address = Address {
///     first_name: Some("Jane".to_string()),
///     last_name: Some("Doe".to_string()),
///     email: Some("jane@example.com".to_string()),
///     country: Some("US".to_string()),
///     region: Some("NY".to_string()),
///     address1: Some("1 Main St".to_string()),
///     city: Some("New York".to_string()),
///     zip: Some("10001".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// Recipient first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Recipient last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Recipient email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Recipient phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Two-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// State, province or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// First street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}
