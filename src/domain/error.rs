//! Error types for shelfview operations.
//!
//! This module defines the application-level error type [`CatalogError`] and a
//! [`Result`] alias used throughout the crate. Errors at the fetch boundary
//! have their own type, [`FetchError`](crate::fetch::FetchError), which
//! converts into [`CatalogError::Fetch`] when it crosses into application
//! code.

use thiserror::Error;

/// The main error type for shelfview operations.
///
/// Consolidates failures from the fetch boundary, configuration loading, and
/// terminal I/O. None of these are fatal to the process: the runtime loop
/// converts them into user-visible messages and keeps accepting commands.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog fetch failed.
    ///
    /// Wraps the typed fetch-boundary error. Converted into a user-facing
    /// message by the event handler; the previously stored catalog stays
    /// visible.
    #[error("fetch error: {0}")]
    Fetch(#[from] crate::fetch::FetchError),

    /// Configuration file is missing required values or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or filesystem I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for shelfview operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
