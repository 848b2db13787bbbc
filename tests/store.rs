//! Tests for the shared catalog store: replacement semantics, the
//! subscription contract, and refresh bookkeeping.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use shelfview::domain::Product;
use shelfview::CatalogStore;

fn batch(ids: std::ops::Range<u64>) -> Vec<Product> {
    ids.map(|id| Product::sample(id, &format!("Item {id}"))).collect()
}

#[test]
fn store_starts_empty_with_no_refresh_timestamp() {
    let store = CatalogStore::new();

    assert!(store.is_empty());
    assert!(store.get_all().is_empty());
    assert!(store.refreshed_at().is_none());
}

#[test]
fn replace_all_swaps_entire_catalog() {
    let store = CatalogStore::new();

    store.replace_all(batch(0..30));
    assert_eq!(store.len(), 30);

    // Full replacement, not a merge: the second batch wins outright.
    store.replace_all(batch(100..103));
    let items = store.get_all();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, 100);
}

#[test]
fn replace_all_accepts_empty_batch() {
    let store = CatalogStore::new();
    store.replace_all(batch(0..5));

    store.replace_all(Vec::new());

    assert!(store.is_empty());
    assert!(store.refreshed_at().is_some());
}

#[test]
fn replace_all_preserves_response_order() {
    let store = CatalogStore::new();
    let items = vec![
        Product::sample(9, "Last alphabetically? First in response."),
        Product::sample(1, "Second"),
        Product::sample(5, "Third"),
    ];

    store.replace_all(items.clone());

    assert_eq!(store.get_all(), items);
}

#[test]
fn subscribers_are_notified_with_new_snapshot() {
    let store = CatalogStore::new();
    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));

    let seen_by_listener = Arc::clone(&seen);
    store.subscribe(move |products| {
        seen_by_listener.lock().unwrap().push(products.len());
    });

    store.replace_all(batch(0..4));
    store.replace_all(batch(0..2));

    assert_eq!(*seen.lock().unwrap(), vec![4, 2]);
}

#[test]
fn unsubscribed_listener_stops_firing() {
    let store = CatalogStore::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let calls_by_listener = Arc::clone(&calls);
    let id = store.subscribe(move |_| {
        calls_by_listener.fetch_add(1, Ordering::SeqCst);
    });

    store.replace_all(batch(0..1));
    store.unsubscribe(id);
    store.replace_all(batch(0..1));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_may_read_the_store_during_notification() {
    // Notification happens after the write lock is released, so a listener
    // that reads back through the store must not deadlock.
    let store = Arc::new(CatalogStore::new());

    let store_for_listener = Arc::clone(&store);
    let observed = Arc::new(AtomicUsize::new(0));
    let observed_by_listener = Arc::clone(&observed);
    store.subscribe(move |_| {
        observed_by_listener.store(store_for_listener.len(), Ordering::SeqCst);
    });

    store.replace_all(batch(0..7));

    assert_eq!(observed.load(Ordering::SeqCst), 7);
}

#[test]
fn refreshed_at_advances_on_each_replacement() {
    let store = CatalogStore::new();

    store.replace_all(batch(0..1));
    let first = store.refreshed_at().expect("set after first replace");

    store.replace_all(batch(0..1));
    let second = store.refreshed_at().expect("set after second replace");

    assert!(second >= first);
}
