//! Line items embedded in orders.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::deserialize_optional_amount;

/// Print placement options for a line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrintDetails {
    /// Which side to print on (e.g. `"mirror"`, `"regular"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_on_side: Option<String>,
}

/// Descriptive metadata Printify attaches to a line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItemMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Retail price of the item.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    /// Human readable variant name, e.g. `"Black / M"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Country the item ships from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A single product line within an order.
///
/// An order line either references an existing product (`product_id` and
/// `variant_id`), a SKU, or describes a product on the fly (`blueprint_id`,
/// `print_provider_id`, `variant_id` and `print_areas`).
///
/// # Example
///
/// ```rust
/// use printify_api::rest::resources::v1::common::LineItem;
///
/// let item = LineItem {
///     product_id: Some("5bfd0b66a342bcc9b5563216".to_string()),
///     variant_id: Some(17887),
///     quantity: 1,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// Line identifier assigned by Printify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Printify product identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Variant identifier within the product or blueprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// Number of units ordered.
    pub quantity: u32,

    /// Print provider used when ordering from a blueprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_provider_id: Option<u64>,

    /// Blueprint used when ordering a product on the fly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<u64>,

    /// Artwork per print position, e.g. `"front"` to an image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_areas: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_details: Option<PrintDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Production cost charged by Printify.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost: Option<f64>,

    /// Shipping cost for this line.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_cost: Option<f64>,

    /// Production status of this line, e.g. `"in-production"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LineItemMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_production_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfilled_at: Option<DateTime<Utc>>,
}
