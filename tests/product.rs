//! Unit tests for the product domain model: derived pricing, average rating,
//! and deserialization of the endpoint's camelCase item shape.

use shelfview::domain::{Product, Review};

fn review(rating: f64) -> Review {
    Review {
        rating,
        comment: None,
    }
}

#[test]
fn discounted_price_applies_percentage() {
    let mut product = Product::sample(1, "Monitor");
    product.price = 100.0;
    product.discount_percentage = 25.0;

    assert!((product.discounted_price() - 75.0).abs() < 1e-9);
}

#[test]
fn discounted_price_is_list_price_without_discount() {
    let mut product = Product::sample(1, "Monitor");
    product.price = 49.99;

    assert!((product.discounted_price() - 49.99).abs() < 1e-9);
}

#[test]
fn discounted_price_clamps_to_zero_on_out_of_range_discount() {
    let mut product = Product::sample(1, "Monitor");
    product.price = 10.0;
    product.discount_percentage = 150.0;

    assert!((product.discounted_price() - 0.0).abs() < 1e-9);
}

#[test]
fn average_rating_is_mean_of_review_ratings() {
    let mut product = Product::sample(1, "Keyboard");
    product.reviews = vec![review(4.0), review(5.0)];

    assert!((product.average_rating() - 4.5).abs() < 1e-9);
}

#[test]
fn average_rating_is_zero_without_reviews() {
    let product = Product::sample(1, "Keyboard");

    assert!((product.average_rating() - 0.0).abs() < 1e-9);
}

#[test]
fn product_deserializes_camel_case_fields() {
    let body = serde_json::json!({
        "id": 7,
        "title": "Essence Mascara",
        "brand": "Essence",
        "price": 9.99,
        "discountPercentage": 10.5,
        "category": "beauty",
        "description": "Lengthening mascara",
        "stock": 99,
        "reviews": [{"rating": 3.0, "comment": "ok"}],
        "warrantyInformation": "1 month warranty",
        "shippingInformation": "Ships overnight",
        "thumbnail": "https://cdn.example/7.png"
    });

    let product: Product = serde_json::from_value(body).expect("valid product JSON");

    assert_eq!(product.id, 7);
    assert_eq!(product.brand, "Essence");
    assert!((product.discount_percentage - 10.5).abs() < 1e-9);
    assert_eq!(
        product.warranty_information.as_deref(),
        Some("1 month warranty")
    );
    assert_eq!(
        product.shipping_information.as_deref(),
        Some("Ships overnight")
    );
    assert_eq!(product.reviews.len(), 1);
}

#[test]
fn product_tolerates_missing_optional_fields() {
    // Groceries on the live endpoint omit brand; older payloads omit reviews
    // and logistics text entirely.
    let body = serde_json::json!({
        "id": 20,
        "title": "Green Apple",
        "price": 1.99
    });

    let product: Product = serde_json::from_value(body).expect("sparse product JSON");

    assert_eq!(product.brand, "");
    assert!(product.reviews.is_empty());
    assert!(product.warranty_information.is_none());
    assert_eq!(product.stock, 0);
}

#[test]
fn product_without_title_deserializes_to_empty_string() {
    let body = serde_json::json!({ "id": 3, "price": 5.0 });

    let product: Product = serde_json::from_value(body).expect("titleless product JSON");

    assert_eq!(product.title, "");
}
