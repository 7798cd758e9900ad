//! Types embedded in Printify orders.
//!
//! These are plain value records, not resources with their own endpoints.

mod address;
mod line_item;
mod money;

pub use address::Address;
pub use line_item::{LineItem, LineItemMetadata, PrintDetails};
pub use money::deserialize_optional_amount;
