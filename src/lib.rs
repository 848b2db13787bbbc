//! Shelfview: a terminal product catalog browser.
//!
//! Shelfview fetches a product catalog from a public REST endpoint, keeps it
//! in a shared in-memory store, and presents it as a searchable list with
//! manual reload. Searching is local (case-insensitive substring over
//! titles); only an explicit reload touches the network.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime Loop (main.rs)                             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and phase transitions             │
//! │  - Title filtering                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Fetch Layer   │
//! │ (ui/)         │   │ (store/)      │   │ (fetch/)      │
//! │ - View models │   │ - Catalog     │   │ - HTTP client │
//! │ - Rendering   │   │ - Observers   │   │ - Wire types  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Product model, derived pricing and ratings       │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data flow
//!
//! 1. **Activate / reload**: the handler enters `Loading` and emits a
//!    `StartFetch` action.
//! 2. **Fetch**: the runtime awaits [`FetchClient::fetch`](fetch::FetchClient::fetch)
//!    and feeds the outcome back as `FetchCompleted`. This is the single
//!    suspension point; the handler ignores reload requests while a fetch is
//!    in flight, so at most one fetch runs at a time.
//! 3. **Apply**: on success the whole catalog is replaced in the
//!    [`CatalogStore`](store::CatalogStore) (subscribers are notified); on
//!    failure the previous catalog stays visible next to the error message.
//! 4. **Derive**: the visible list is re-filtered from the store contents
//!    and the current query, then rendered via a view model snapshot.
//!
//! # Modules
//!
//! - [`app`]: Event/action state machine and the title filter
//! - [`domain`]: Product model and error types
//! - [`fetch`]: HTTP client and wire types for the catalog endpoint
//! - [`store`]: Shared in-memory catalog with a subscription contract
//! - [`ui`]: View models and plain-text rendering
//! - [`observability`]: Tracing subscriber setup

pub mod app;
pub mod domain;
pub mod fetch;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{filter_by_title, handle_event, Action, AppState, Event, LoadPhase};
pub use domain::{CatalogError, Product, Result, Review};
pub use fetch::{FetchClient, FetchError};
pub use store::{CatalogStore, SubscriptionId};

use serde::Deserialize;

/// Default catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products";

/// Default display cap on fetched items.
pub const DEFAULT_MAX_ITEMS: usize = 30;

/// Application configuration.
///
/// Loaded from an optional TOML file passed as the binary's only argument;
/// every field has a usable default so running with no file at all works.
///
/// # Example
///
/// ```toml
/// # shelfview.toml
/// endpoint = "https://dummyjson.com/products"
/// max_items = 30
/// timeout_secs = 10
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the catalog endpoint.
    pub endpoint: String,

    /// Display cap applied after a successful fetch. `None` keeps the full
    /// response.
    pub max_items: Option<usize>,

    /// Request timeout in seconds for the HTTP client.
    pub timeout_secs: u64,

    /// Tracing filter directive (e.g. `"info"`, `"shelfview=debug"`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_items: Some(DEFAULT_MAX_ITEMS),
            timeout_secs: 10,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] if it is not valid TOML.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| CatalogError::Config(format!("failed to parse {}: {e}", path.display())))
    }
}
