//! REST resources for Printify API version 1.
//!
//! # Available Resources
//!
//! ## Order Resource
//!
//! - [`Order`] - An order placed in a Printify shop
//! - [`OrderListParams`] - Filters for listing orders
//! - [`OrderMetadata`] - Sales-channel details of an order
//! - [`Shipment`] - Tracking information for a shipped package
//! - [`SubmittedOrder`] - Outcome of submitting an order
//! - [`ShippingCost`] - Standard and express shipping estimates
//!
//! Shared embedded types (addresses, line items) live in [`common`].

pub mod common;
mod order;
mod shipping_cost;

pub use order::{Order, OrderListParams, OrderMetadata, Shipment, SubmittedOrder};
pub use shipping_cost::ShippingCost;
