//! Catalog fetch boundary.
//!
//! This module owns everything that touches the network: the HTTP client, the
//! wire response types, and the fetch-boundary error taxonomy. The rest of
//! the crate only sees `Result<Vec<Product>, FetchError>`.

pub mod client;
pub mod response;

pub use client::{FetchClient, FetchError};
pub use response::CatalogResponse;
