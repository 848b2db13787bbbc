//! Application state container.
//!
//! This module defines [`AppState`], the central state for the catalog
//! browser, along with the [`LoadPhase`] lifecycle enum. The state separates
//! the shared catalog (owned by [`CatalogStore`]) from derived, per-screen
//! data: the current query, the visible filtered subset, and the load phase.
//!
//! State is mutated exclusively by the event handler in
//! [`handler`](crate::app::handler); view models are computed on demand from
//! state snapshots by
//! [`CatalogViewModel::from_state`](crate::ui::CatalogViewModel::from_state).

use std::sync::Arc;

use crate::app::filter::filter_by_title;
use crate::domain::Product;
use crate::store::CatalogStore;

/// Lifecycle phase of the catalog screen.
///
/// `Loading` is re-entered on every reload; `Ready` and `Failed` are both
/// resumable, so there is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No fetch has been started yet.
    Idle,

    /// A fetch is in flight. Reload requests are ignored in this phase.
    Loading,

    /// The last fetch succeeded and its result is in the store.
    Ready,

    /// The last fetch failed. Previously stored items remain visible.
    Failed,
}

/// Central application state for the catalog browser.
///
/// Holds the shared store handle plus all per-screen transient state. The
/// visible list is a derived value: it is recomputed from the store contents
/// and the current query whenever either changes, never mutated directly.
pub struct AppState {
    /// Shared catalog store, also visible to any external subscribers.
    pub store: Arc<CatalogStore>,

    /// Current lifecycle phase.
    pub phase: LoadPhase,

    /// Current search query. Applied case-insensitively to product titles.
    pub query: String,

    /// Filtered subset of the store contents, in store order.
    ///
    /// Recomputed by [`apply_filter`](Self::apply_filter) after fetches and
    /// query edits.
    pub visible: Vec<Product>,

    /// User-facing message from the last failed fetch, `None` otherwise.
    pub error: Option<String>,
}

impl AppState {
    /// Creates a fresh state around a shared store.
    ///
    /// Starts in [`LoadPhase::Idle`] with an empty query and no visible
    /// items; the first `Activate` event kicks off the initial fetch.
    #[must_use]
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            phase: LoadPhase::Idle,
            query: String::new(),
            visible: Vec::new(),
            error: None,
        }
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Re-derives the visible list from the store contents and the current
    /// query.
    ///
    /// Pure with respect to the store: reads a snapshot, filters it, and
    /// stores the result in `visible`. Does not fetch and does not touch the
    /// phase.
    pub fn apply_filter(&mut self) {
        let all = self.store.get_all();
        self.visible = filter_by_title(&all, &self.query);

        tracing::debug!(
            total = all.len(),
            visible = self.visible.len(),
            query_len = self.query.len(),
            "filter applied"
        );
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("phase", &self.phase)
            .field("query", &self.query)
            .field("visible", &self.visible.len())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
