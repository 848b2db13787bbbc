//! View model types representing renderable screen state.
//!
//! View models are immutable snapshots computed from [`AppState`], containing
//! only display-ready data: formatted prices, pre-computed ratings, status
//! text. They carry no business logic and hold no references into live state,
//! which keeps the renderer trivial and the computation easy to test.

use crate::app::{AppState, LoadPhase};
use crate::domain::Product;
use crate::ui::helpers::time_ago;

/// Complete view model for one render of the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewModel {
    /// Header line: title, visible/total counts, last refresh time.
    pub header: HeaderInfo,

    /// Status line shown while loading or after a failed fetch.
    pub status: Option<StatusLine>,

    /// One row per visible product, in store order.
    pub rows: Vec<DisplayRow>,

    /// Message shown instead of rows when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Echo of the active search query, when one is set.
    pub search: Option<SearchInfo>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    /// Formatted title, e.g. `" Catalog (12/30) "`.
    pub title: String,

    /// Relative time of the last successful fetch, e.g. `"refreshed 2m ago"`.
    /// `None` before the first successful fetch.
    pub refreshed: Option<String>,
}

/// Transient status shown under the header.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    /// A fetch is in flight.
    Loading,

    /// The last fetch failed; carries the user-facing message.
    Error(String),
}

/// Display information for a single product row.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Product display name.
    pub title: String,

    /// Brand label, empty when unknown.
    pub brand: String,

    /// Category label.
    pub category: String,

    /// List price, formatted to two decimals.
    pub price: String,

    /// Price after discount, formatted to two decimals. Equals `price` when
    /// no discount applies.
    pub discounted_price: String,

    /// Average review rating, formatted to one decimal (`"0.0"` with no
    /// reviews).
    pub rating: String,

    /// Units in stock.
    pub stock: i64,
}

/// Reason the row area is empty, with a user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    /// Message to display centered in the row area.
    pub message: String,
}

/// Active search echo.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInfo {
    /// The current query text.
    pub query: String,
}

impl CatalogViewModel {
    /// Computes a view model snapshot from the current application state.
    ///
    /// Formats prices and ratings, picks the status line from the load phase,
    /// and chooses an empty-state message when no rows are visible: a hint to
    /// reload before the first fetch, a no-match notice for a filtering
    /// query, and an empty-catalog notice otherwise.
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let total = state.store.len();

        let header = HeaderInfo {
            title: format!(" Catalog ({}/{}) ", state.visible.len(), total),
            refreshed: state
                .store
                .refreshed_at()
                .map(|at| format!("refreshed {}", time_ago(at))),
        };

        let status = match state.phase {
            LoadPhase::Loading => Some(StatusLine::Loading),
            LoadPhase::Failed => state.error.clone().map(StatusLine::Error),
            LoadPhase::Idle | LoadPhase::Ready => None,
        };

        let rows: Vec<DisplayRow> = state.visible.iter().map(DisplayRow::from_product).collect();

        let empty_state = if rows.is_empty() {
            Some(EmptyState {
                message: empty_message(state, total),
            })
        } else {
            None
        };

        let search = if state.query.is_empty() {
            None
        } else {
            Some(SearchInfo {
                query: state.query.clone(),
            })
        };

        Self {
            header,
            status,
            rows,
            empty_state,
            search,
        }
    }
}

impl DisplayRow {
    /// Formats one product for display.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: format!("{:.2}", product.price),
            discounted_price: format!("{:.2}", product.discounted_price()),
            rating: format!("{:.1}", product.average_rating()),
            stock: product.stock,
        }
    }
}

/// Picks the empty-state message for the current situation.
fn empty_message(state: &AppState, total: usize) -> String {
    if total == 0 && state.phase == LoadPhase::Idle {
        "No catalog loaded yet. Type :reload to fetch.".to_string()
    } else if total == 0 {
        "The catalog is empty.".to_string()
    } else {
        format!("No products match \"{}\".", state.query)
    }
}
