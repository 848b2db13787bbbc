//! Domain layer for shelfview.
//!
//! Core domain types and derived computations, independent of HTTP, storage,
//! or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`product`]: Product model with derived pricing and rating

pub mod error;
pub mod product;

pub use error::{CatalogError, Result};
pub use product::{Product, Review};
