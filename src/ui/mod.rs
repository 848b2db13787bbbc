//! Terminal presentation layer.
//!
//! Rendering happens in two steps, keeping display logic out of the
//! application layer:
//!
//! 1. **View model computation**: [`CatalogViewModel::from_state`] turns
//!    application state into display-ready data.
//! 2. **Rendering**: [`render`] turns a view model into a plain string.
//!
//! # Modules
//!
//! - [`helpers`]: Relative time formatting and text truncation
//! - [`renderer`]: Plain-text table rendering
//! - [`viewmodel`]: Immutable display snapshots

pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{CatalogViewModel, DisplayRow, EmptyState, HeaderInfo, SearchInfo, StatusLine};
