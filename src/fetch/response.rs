//! Wire types for the catalog endpoint's `GET /products` response.
//!
//! ## Observed shape (DummyJSON `https://dummyjson.com/products`)
//!
//! The body is a JSON object wrapping the item array plus paging counters:
//!
//! ```json
//! {
//!   "products": [ { "id": 1, "title": "...", ... } ],
//!   "total": 194,
//!   "skip": 0,
//!   "limit": 30
//! }
//! ```
//!
//! Only the `products` field is required here; a body without it fails
//! deserialization and surfaces as a malformed-response error. The paging
//! counters are accepted when present but unused, since the application
//! renders a single capped page and does not paginate.
//!
//! Item fields arrive in camelCase (`discountPercentage`,
//! `warrantyInformation`, `shippingInformation`); the [`Product`] type maps
//! them via serde renaming. `brand` is absent on some items (groceries in
//! particular) and defaults to an empty string.

use serde::Deserialize;

use crate::domain::Product;

/// Top-level response from `GET /products`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    /// The catalog items, in endpoint order.
    pub products: Vec<Product>,

    /// Total item count on the server. Informational only.
    #[serde(default)]
    pub total: Option<u64>,
}
