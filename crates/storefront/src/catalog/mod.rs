//! Catalog API client.
//!
//! The catalog service owns the product collection; the storefront fetches
//! it whole with `reqwest` and slices it locally. Responses are cached with
//! `moka` (TTL from configuration) so a listing request normally costs one
//! upstream call per TTL window, not one per page view. There is no retry
//! and no incremental loading.

pub mod types;

use std::sync::Arc;

use moka::future::Cache;
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;
use types::Product;

/// Cache key for the full product list. The catalog is fetched whole, so
/// there is exactly one entry.
const PRODUCTS_CACHE_KEY: &str = "products";

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog API answered with a non-success status.
    #[error("Catalog API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the catalog API.
///
/// Cheaply cloneable via `Arc`. The fetched product list is shared behind
/// an `Arc` as well, so cache hits never copy the catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
    cache: Cache<&'static str, Arc<Vec<Product>>>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint: products_endpoint(&config.base_url),
                api_token: config
                    .api_token
                    .as_ref()
                    .map(|token| token.expose_secret().to_string()),
                cache,
            }),
        }
    }

    /// Fetch the full product list.
    ///
    /// Returns the cached list when one is still live; otherwise issues a
    /// single GET to the catalog API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body is not a valid product list.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(products) = self.inner.cache.get(PRODUCTS_CACHE_KEY).await {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let mut request = self.inner.client.get(&self.inner.endpoint);
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: response_text.chars().take(200).collect(),
            });
        }

        let products: Vec<Product> = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })?;

        let products = Arc::new(products);
        self.inner
            .cache
            .insert(PRODUCTS_CACHE_KEY, Arc::clone(&products))
            .await;

        Ok(products)
    }

    /// Drop the cached catalog so the next fetch hits the API.
    pub async fn invalidate(&self) {
        self.inner.cache.invalidate(PRODUCTS_CACHE_KEY).await;
        self.inner.cache.run_pending_tasks().await;
    }
}

/// Build the products endpoint from the configured base URL.
fn products_endpoint(base_url: &str) -> String {
    format!("{base_url}/products")
}
