//! Shared in-memory catalog store.
//!
//! [`CatalogStore`] is the single source of truth for fetched products. It is
//! deliberately narrow: consumers read snapshots via [`get_all`], and the one
//! writer (the fetch cycle) replaces the whole catalog via [`replace_all`].
//! There is no merging, no per-item mutation, and no deletion other than full
//! replacement.
//!
//! Instead of ambient global state, the store is an explicit object shared via
//! `Arc` and injected into its consumers. Reactivity is an explicit
//! subscription contract: callbacks registered with [`subscribe`] run on every
//! replace with a snapshot of the new catalog.
//!
//! [`get_all`]: CatalogStore::get_all
//! [`replace_all`]: CatalogStore::replace_all
//! [`subscribe`]: CatalogStore::subscribe

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::domain::Product;

/// Handle returned by [`CatalogStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[Product]) + Send + Sync>;

/// Shared, process-wide catalog of fetched products.
///
/// Holds the current item list in fetch-response order together with the
/// timestamp of the last successful replacement. Interior mutability makes a
/// shared `Arc<CatalogStore>` usable from both the event handler and any
/// subscribed observers.
///
/// # Concurrency
///
/// The fetch cycle is the single logical writer; concurrent `replace_all`
/// calls are not expected, and if they ever happen the last write wins.
/// Poisoned locks are recovered rather than propagated, since a snapshot of
/// product data cannot be left in a torn state by a panicking reader.
#[derive(Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
    refreshed_at: RwLock<Option<DateTime<Utc>>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl CatalogStore {
    /// Creates an empty store. The catalog stays empty until the first
    /// successful fetch is applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current catalog in fetch-response order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of items currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when no catalog has been stored yet (or the last fetch
    /// yielded zero items).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns when the catalog was last successfully replaced, or `None`
    /// before the first successful fetch.
    #[must_use]
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        *self
            .refreshed_at
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the entire catalog with `items` and notifies subscribers.
    ///
    /// Accepts any sequence, including an empty one. The previous contents
    /// are discarded wholesale; callers that want stale-data-on-failure
    /// semantics simply skip this call when a fetch fails.
    ///
    /// Listeners run after the write lock is released, each receiving the
    /// same snapshot of the new catalog. A listener that panics poisons
    /// nothing in the store itself.
    pub fn replace_all(&self, items: Vec<Product>) {
        let count = items.len();
        {
            let mut guard = self
                .products
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = items;
        }
        {
            let mut guard = self
                .refreshed_at
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some(Utc::now());
        }

        tracing::debug!(count, "catalog replaced");
        self.notify();
    }

    /// Registers a callback invoked with a catalog snapshot after every
    /// replacement. Returns a handle for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Product]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a previously registered listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Invokes every registered listener with a fresh snapshot.
    fn notify(&self) {
        let snapshot = self.get_all();
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in listeners.iter() {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("len", &self.len())
            .field("refreshed_at", &self.refreshed_at())
            .finish_non_exhaustive()
    }
}
