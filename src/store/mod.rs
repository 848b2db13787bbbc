//! Shared catalog state.
//!
//! A single module today: the in-memory [`CatalogStore`] with its
//! subscription contract.

pub mod catalog;

pub use catalog::{CatalogStore, SubscriptionId};
