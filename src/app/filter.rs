//! Case-insensitive title filtering.
//!
//! The filter is a pure function over an already-fetched item list. No fuzzy
//! matching and no ranking: plain substring containment over lowercased
//! titles, preserving the input order.
//!
//! # Laws
//!
//! - Identity: an empty query returns the input unchanged.
//! - Subsequence: the output is an ordered subsequence of the input.
//! - Containment: every returned title contains the query, case-insensitively.
//! - Idempotence: filtering a filtered list with the same query is a no-op.

use crate::domain::Product;

/// Returns the ordered subsequence of `items` whose title contains `query`
/// as a case-insensitive substring.
///
/// An empty query returns a clone of `items` in the same order. Items with a
/// missing title carry an empty string and therefore never match a non-empty
/// query; they are skipped rather than treated as an error.
///
/// # Examples
///
/// ```
/// use shelfview::app::filter_by_title;
/// use shelfview::domain::Product;
///
/// let items = vec![
///     Product::sample(1, "iPhone 9"),
///     Product::sample(2, "Samsung Galaxy"),
///     Product::sample(3, "Huawei Phone"),
/// ];
///
/// let hits = filter_by_title(&items, "phone");
/// let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
/// assert_eq!(titles, ["iPhone 9", "Huawei Phone"]);
/// ```
#[must_use]
pub fn filter_by_title(items: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
