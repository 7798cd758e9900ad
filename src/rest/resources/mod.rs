//! Version-specific REST resource implementations.
//!
//! Resources are grouped by the API version they target:
//!
//! ```text
//! resources/
//!   mod.rs      <- This file (re-exports the latest version)
//!   v1/
//!     mod.rs    <- Version-specific resources
//! ```
//!
//! The latest version is re-exported here:
//!
//! ```rust,ignore
//! use printify_api::rest::resources::Order;      // latest version
//! use printify_api::rest::resources::v1::Order;  // explicit version
//! ```

pub mod v1;

pub use v1::*;
