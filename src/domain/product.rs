//! Product domain model and derived values.
//!
//! This module defines the core [`Product`] type representing one catalog entry
//! as returned by the catalog endpoint, along with its derived pricing and
//! rating computations. Field names follow the endpoint's camelCase JSON keys
//! via serde renaming.

use serde::{Deserialize, Serialize};

/// A customer review attached to a product.
///
/// Only the numeric rating participates in derived computations; the comment
/// is carried for display purposes and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating, typically in the 1..=5 range.
    pub rating: f64,

    /// Free-text review body, when the endpoint provides one.
    #[serde(default)]
    pub comment: Option<String>,
}

/// One product entry from the catalog.
///
/// Fields mirror the catalog endpoint's item shape. Descriptive text fields
/// default to empty strings when absent so a partially populated item never
/// fails deserialization; optional logistics fields stay `None`.
///
/// # Invariants
///
/// - `id` is unique within one fetched batch (guaranteed by the endpoint,
///   not re-validated here).
/// - `price` is non-negative and `discount_percentage` lies in `[0, 100]`
///   for well-formed data; out-of-range values only affect the clamped
///   result of [`discounted_price`](Product::discounted_price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable numeric identifier assigned by the catalog endpoint.
    pub id: u64,

    /// Display name. Missing titles deserialize to an empty string, which
    /// makes them invisible to non-empty search queries rather than an error.
    #[serde(default)]
    pub title: String,

    /// Manufacturer or brand label. Empty when the endpoint omits it.
    #[serde(default)]
    pub brand: String,

    /// List price before any discount.
    pub price: f64,

    /// Discount as a percentage of `price`, expected in `[0, 100]`.
    #[serde(default)]
    pub discount_percentage: f64,

    /// Category label (e.g. `"smartphones"`).
    #[serde(default)]
    pub category: String,

    /// Free-text product description.
    #[serde(default)]
    pub description: String,

    /// Units currently in stock.
    #[serde(default)]
    pub stock: i64,

    /// Customer reviews. Empty when the endpoint provides none.
    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Warranty text (e.g. `"1 month warranty"`).
    #[serde(default)]
    pub warranty_information: Option<String>,

    /// Shipping text (e.g. `"Ships in 1-2 business days"`).
    #[serde(default)]
    pub shipping_information: Option<String>,

    /// URI of the product thumbnail image.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Product {
    /// Returns the effective price after applying the discount percentage.
    ///
    /// Computed as `price * (1 - discount_percentage / 100)` and clamped to
    /// zero, so malformed discounts above 100% never produce a negative price.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfview::domain::Product;
    ///
    /// let mut product = Product::sample(1, "Lamp");
    /// product.price = 100.0;
    /// product.discount_percentage = 25.0;
    /// assert!((product.discounted_price() - 75.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn discounted_price(&self) -> f64 {
        let discounted = self.price * (1.0 - self.discount_percentage / 100.0);
        discounted.max(0.0)
    }

    /// Returns the arithmetic mean of all review ratings, or `0.0` when the
    /// product has no reviews.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let total: f64 = self.reviews.iter().map(|r| r.rating).sum();
        total / self.reviews.len() as f64
    }

    /// Builds a minimal product with the given id and title.
    ///
    /// Every other field takes a neutral default. Intended for doctests and
    /// test fixtures that only care about identity and display name.
    #[must_use]
    pub fn sample(id: u64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            brand: String::new(),
            price: 0.0,
            discount_percentage: 0.0,
            category: String::new(),
            description: String::new(),
            stock: 0,
            reviews: Vec::new(),
            warranty_information: None,
            shipping_information: None,
            thumbnail: None,
        }
    }
}
