//! Order resource implementation.
//!
//! This module provides the [`Order`] resource for managing the orders of a
//! Printify shop. All operations are scoped to a shop id.
//!
//! # Operations
//!
//! - [`Order::all`] / [`Order::page`] - List orders, optionally filtered
//! - [`Order::find`] - Fetch one order
//! - [`Order::submit`] - Create an order
//! - [`Order::send_to_production`] - Release an order for fulfillment
//! - [`Order::calculate_shipping`] - Estimate shipping for an unsaved order
//! - [`Order::cancel`] - Cancel an order
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::rest::resources::v1::{Order, OrderListParams};
//!
//! let params = OrderListParams {
//!     status: Some("on-hold".to_string()),
//!     limit: Some(10),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, 42, &params).await?;
//!
//! let order = Order::find(&client, 42, 5_234_887).await?;
//! let cancelled = Order::cancel(&client, 42, 5_234_887).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{ApiResponse, HttpClient, HttpError, HttpMethod, Transport};
use crate::rest::operation::{decode_value, execute};
use crate::rest::page::Page;
use crate::rest::path::{ResourceOperation, ResourcePath};

use super::common::{deserialize_optional_amount, Address, LineItem};
use super::shipping_cost::ShippingCost;

const LIST: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    ResourceOperation::All,
    &["shop_id"],
    "shops/{shop_id}/orders.json",
);

const FIND: ResourcePath = ResourcePath::new(
    HttpMethod::Get,
    ResourceOperation::Find,
    &["shop_id", "order_id"],
    "shops/{shop_id}/orders/{order_id}.json",
);

const SUBMIT: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    ResourceOperation::Create,
    &["shop_id"],
    "shops/{shop_id}/orders.json",
);

const SEND_TO_PRODUCTION: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    ResourceOperation::SendToProduction,
    &["shop_id", "order_id"],
    "shops/{shop_id}/orders/{order_id}/send_to_production.json",
);

const CALCULATE_SHIPPING: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    ResourceOperation::CalculateShipping,
    &["shop_id"],
    "shops/{shop_id}/orders/shipping.json",
);

const CANCEL: ResourcePath = ResourcePath::new(
    HttpMethod::Post,
    ResourceOperation::Cancel,
    &["shop_id", "order_id"],
    "shops/{shop_id}/orders/{order_id}/cancel.json",
);

/// Sales-channel details attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderMetadata {
    /// How the order was placed, e.g. `"external"` or `"manual"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,

    /// Order id in the connected sales channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_order_id: Option<u64>,

    /// Order label in the connected sales channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_order_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_fulfilled_at: Option<DateTime<Utc>>,
}

/// Tracking information for a shipped package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Shipment {
    /// Carrier name, e.g. `"usps"`.
    pub carrier: String,

    /// Tracking number.
    pub number: String,

    /// Tracking URL.
    pub url: String,

    /// When the package was delivered, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
}

/// A Printify order.
///
/// The same record is used as a request body (submit, shipping estimates)
/// and as a response. Fields Printify assigns, such as `id`, `status` and
/// the totals, are left `None` when building a new order and are omitted
/// from the request JSON.
///
/// # Fields
///
/// ## Required Fields
/// - `line_items` - The products being ordered (may be empty)
/// - `shipping_method` - `1` for standard, `2` for express
///
/// ## Assigned by Printify
/// - `id`, `status`, `total_price`, `total_shipping`, `total_tax`
/// - `shipments`, `created_at`, `sent_to_production_at`, `fulfilled_at`
///
/// # Example
///
/// ```rust
/// use printify_api::rest::resources::v1::common::{Address, LineItem};
/// use printify_api::rest::resources::v1::Order;
///
/// let order = Order {
///     external_id: Some("2750e210-39bb-11e9-a503-452618153e4a".to_string()),
///     label: Some("00012".to_string()),
///     line_items: vec![LineItem {
///         product_id: Some("5bfd0b66a342bcc9b5563216".to_string()),
///         variant_id: Some(17887),
///         quantity: 1,
///         ..Default::default()
///     }],
///     shipping_method: 1,
///     send_shipping_notification: Some(false),
///     address_to: Some(Address {
///         first_name: Some("John".to_string()),
///         last_name: Some("Smith".to_string()),
///         country: Some("BE".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&order).unwrap();
/// assert!(json.get("id").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// Printify order identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Caller-chosen identifier, unique per shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Caller-chosen display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Recipient address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_to: Option<Address>,

    /// The products being ordered.
    pub line_items: Vec<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OrderMetadata>,

    /// Order total including shipping and tax.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<f64>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_shipping: Option<f64>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_tax: Option<f64>,

    /// Lifecycle status, e.g. `"pending"`, `"on-hold"`, `"fulfilled"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// `1` for standard shipping, `2` for express.
    pub shipping_method: u32,

    /// Whether Printify Express delivery was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_printify_express: Option<bool>,

    /// Whether Printify emails the recipient when the order ships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_shipping_notification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Vec<Shipment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_production_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfilled_at: Option<DateTime<Utc>>,
}

/// Parameters for listing orders.
///
/// All fields are optional. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// 1-based page number.
    pub page: Option<u32>,

    /// Maximum number of orders per page.
    pub limit: Option<u32>,

    /// Only return orders with this status.
    pub status: Option<String>,
}

impl OrderListParams {
    /// Returns the query pairs for the set fields, in `page`, `limit`,
    /// `status` order.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(3);
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        query
    }
}

/// Outcome of [`Order::submit`].
///
/// Printify answers a submit either with the full created order or with
/// just `{"id": "..."}`. Both are successful submissions.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmittedOrder {
    /// The response carried the full order.
    Created {
        /// Identifier of the new order.
        id: String,
        /// The order as stored by Printify.
        order: Box<Order>,
    },
    /// The response carried only the identifier.
    Acknowledged {
        /// Identifier of the new order.
        id: String,
    },
}

impl SubmittedOrder {
    /// Returns the identifier of the submitted order.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Created { id, .. } | Self::Acknowledged { id } => id,
        }
    }

    /// Returns the full order, when the response included it.
    #[must_use]
    pub fn order(&self) -> Option<&Order> {
        match self {
            Self::Created { order, .. } => Some(order.as_ref()),
            Self::Acknowledged { .. } => None,
        }
    }

    /// Consumes the outcome, returning the order identifier.
    #[must_use]
    pub fn into_id(self) -> String {
        match self {
            Self::Created { id, .. } | Self::Acknowledged { id } => id,
        }
    }
}

// The id-only reply Printify sometimes sends for a submit. Any extra field
// means the body is meant to be a full order.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SubmitAcknowledgement {
    id: String,
}

fn reconcile_submit(status: u16, body: Value) -> Result<SubmittedOrder, HttpError> {
    if let Ok(SubmitAcknowledgement { id }) = SubmitAcknowledgement::deserialize(&body) {
        return Ok(SubmittedOrder::Acknowledged { id });
    }

    let order: Box<Order> = decode_value(status, body)?;
    match order.id.clone() {
        Some(id) => Ok(SubmittedOrder::Created { id, order }),
        None => Err(HttpError::Decode {
            status,
            source: serde_json::Error::custom("submitted order response has no id"),
        }),
    }
}

// List responses are either the pagination envelope or a bare array.
fn decode_order_list(status: u16, body: Value) -> Result<Vec<Order>, HttpError> {
    if body.is_array() {
        decode_value(status, body)
    } else {
        decode_value::<Page<Vec<Order>>>(status, body).map(Page::into_data)
    }
}

impl Order {
    /// Lists the orders of a shop.
    ///
    /// Accepts both the paginated envelope and a bare JSON array; use
    /// [`Order::page`] to keep the pagination details.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails, the status is 400 or
    /// above, or the body is neither a page of orders nor an array of them.
    pub async fn all<T: Transport>(
        client: &HttpClient<T>,
        shop_id: u64,
        params: &OrderListParams,
    ) -> Result<Vec<Self>, HttpError> {
        let query = params.to_query();
        let response: ApiResponse<Value> =
            execute::<_, (), _>(client, &LIST, &[shop_id], &query, None).await?;
        decode_order_list(response.status, response.data)
    }

    /// Lists one page of a shop's orders, keeping the pagination envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails, the status is 400 or
    /// above, or the body is not a page of orders.
    pub async fn page<T: Transport>(
        client: &HttpClient<T>,
        shop_id: u64,
        params: &OrderListParams,
    ) -> Result<Page<Vec<Self>>, HttpError> {
        let query = params.to_query();
        let response = execute::<_, (), _>(client, &LIST, &[shop_id], &query, None).await?;
        Ok(response.into_data())
    }

    /// Fetches a single order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Protocol`] with status 404 if the order does not
    /// exist (see [`HttpError::is_not_found`]), or any other [`HttpError`].
    pub async fn find<T: Transport>(
        client: &HttpClient<T>,
        shop_id: u64,
        order_id: u64,
    ) -> Result<Self, HttpError> {
        let response =
            execute::<_, (), _>(client, &FIND, &[shop_id, order_id], &[], None).await?;
        Ok(response.into_data())
    }

    /// Submits this order to a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if the order cannot be encoded,
    /// [`HttpError::Decode`] if the response is neither exactly `{"id": ...}`
    /// nor a valid order carrying an id, or any other [`HttpError`].
    pub async fn submit<T: Transport>(
        &self,
        client: &HttpClient<T>,
        shop_id: u64,
    ) -> Result<SubmittedOrder, HttpError> {
        let response: ApiResponse<Value> =
            execute(client, &SUBMIT, &[shop_id], &[], Some(self)).await?;

        let submitted = reconcile_submit(response.status, response.data)?;
        if let SubmittedOrder::Acknowledged { id } = &submitted {
            tracing::debug!(
                "Order submitted to shop {}; response carried only id {}",
                shop_id,
                id
            );
        }
        Ok(submitted)
    }

    /// Sends an existing order to production.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or Printify rejects it.
    pub async fn send_to_production<T: Transport>(
        client: &HttpClient<T>,
        shop_id: u64,
        order_id: u64,
    ) -> Result<Self, HttpError> {
        let response = execute::<_, (), _>(
            client,
            &SEND_TO_PRODUCTION,
            &[shop_id, order_id],
            &[],
            None,
        )
        .await?;
        Ok(response.into_data())
    }

    /// Estimates the shipping cost of this order without creating it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or Printify rejects it.
    pub async fn calculate_shipping<T: Transport>(
        &self,
        client: &HttpClient<T>,
        shop_id: u64,
    ) -> Result<ShippingCost, HttpError> {
        let response = execute(client, &CALCULATE_SHIPPING, &[shop_id], &[], Some(self)).await?;
        Ok(response.into_data())
    }

    /// Cancels an order that has not been sent to production.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or Printify rejects it.
    pub async fn cancel<T: Transport>(
        client: &HttpClient<T>,
        shop_id: u64,
        order_id: u64,
    ) -> Result<Self, HttpError> {
        let response =
            execute::<_, (), _>(client, &CANCEL, &[shop_id, order_id], &[], None).await?;
        Ok(response.into_data())
    }
}
