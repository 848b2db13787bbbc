//! HTTP client for the catalog endpoint.
//!
//! One fixed URL, one GET per invocation, no retries and no pagination. The
//! caller decides when to re-fetch (initial activation and manual reload);
//! every successful fetch fully supersedes the previous catalog once the
//! caller applies it to the store.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::domain::Product;
use crate::fetch::response::CatalogResponse;
use crate::Config;

/// User agent sent with every catalog request.
const USER_AGENT: &str = concat!("shelfview/", env!("CARGO_PKG_VERSION"));

/// Errors produced at the fetch boundary.
///
/// Both variants degrade to a user-visible message in the application layer;
/// neither aborts the process or clears previously fetched items.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed in transit or returned a non-success status.
    ///
    /// Covers DNS/TLS/connect failures, timeouts, and any non-2xx response
    /// (folded in via `Response::error_for_status`).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not the expected catalog shape.
    ///
    /// Typically the `products` array is missing or an item field has the
    /// wrong type.
    #[error("malformed catalog response from {url}: {source}")]
    MalformedResponse {
        /// Endpoint the body came from.
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the catalog endpoint.
///
/// Wraps a configured `reqwest::Client` together with the endpoint URL and
/// the optional display cap. Cheap to clone; reuses the underlying connection
/// pool across fetches.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    endpoint: String,
    max_items: Option<usize>,
}

impl FetchClient {
    /// Creates a `FetchClient` from application configuration.
    ///
    /// Applies the configured request timeout and a crate-identifying
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g. invalid TLS backend setup).
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            max_items: config.max_items,
        })
    }

    /// Fetches the catalog and returns its items in response order.
    ///
    /// Issues a single GET to the configured endpoint, parses the body, and
    /// truncates the result to the configured display cap when one is set.
    /// Idempotent: repeated invocations are independent reads.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] on transport failure or a non-2xx status.
    /// - [`FetchError::MalformedResponse`] when the body lacks the expected
    ///   `products` array or an item has the wrong shape.
    pub async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: CatalogResponse =
            serde_json::from_str(&body).map_err(|source| FetchError::MalformedResponse {
                url: self.endpoint.clone(),
                source,
            })?;

        let mut products = parsed.products;
        if let Some(cap) = self.max_items {
            products.truncate(cap);
        }

        tracing::debug!(
            count = products.len(),
            total = ?parsed.total,
            "catalog fetched"
        );

        Ok(products)
    }
}
