//! Application state shared across handlers.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the catalog client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog);

        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Warm the catalog cache in the background.
    ///
    /// The first listing request would otherwise pay for the upstream
    /// fetch. The returned handle must be aborted on shutdown so the
    /// in-flight request does not outlive the server.
    pub fn start_catalog_prewarm(&self) -> JoinHandle<()> {
        let catalog = self.catalog().clone();
        tokio::spawn(async move {
            match catalog.products().await {
                Ok(products) => {
                    tracing::info!(count = products.len(), "Catalog prewarmed");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Catalog prewarm failed");
                }
            }
        })
    }
}
