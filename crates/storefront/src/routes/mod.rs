//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the product listing
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog reachable)
//!
//! # Products
//! GET  /products               - Product listing (filter/sort/page via query)
//! GET  /products/{category}    - Listing pre-filtered to one category
//! ```
//!
//! Product cards link outbound to `/product/{id}`, which is served by the
//! product detail deployment.

pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{category}", get(products::index_by_category))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::home))
        .nest("/products", product_routes())
}
