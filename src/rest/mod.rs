//! REST resources for the Printify API.
//!
//! This module provides:
//!
//! - **Path building**: [`ResourcePath`] tables and [`build_path`]
//! - **[`execute`]**: The shared send-and-decode step behind every operation
//! - **[`Page<T>`]**: The pagination envelope returned by list endpoints
//! - **[`resources`]**: Version-specific resources such as `Order`
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::{ApiKey, HttpClient, PrintifyConfig};
//! use printify_api::rest::resources::{Order, OrderListParams};
//!
//! let config = PrintifyConfig::builder()
//!     .api_key(ApiKey::new(std::env::var("PRINTIFY_TOKEN")?)?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let page = Order::page(&client, 42, &OrderListParams::default()).await?;
//! for order in &page.data {
//!     println!("{:?} {:?}", order.id, order.status);
//! }
//! if let Some(next) = page.next_page() {
//!     println!("more orders on page {next}");
//! }
//! ```

mod operation;
mod page;
mod path;

pub mod resources;

pub use operation::{decode_value, execute};
pub use page::{Page, PageLink};
pub use path::{build_path, ResourceOperation, ResourcePath};
