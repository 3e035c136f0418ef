//! Integration tests for Garimpo.
//!
//! # Running Tests
//!
//! ```bash
//! # Start a catalog API (or point CATALOG_API_URL at a real one)
//! CATALOG_API_URL=http://localhost:4000 cargo run -p garimpo-storefront
//!
//! # Run integration tests against it
//! cargo test -p garimpo-integration-tests -- --ignored
//! ```
//!
//! The tests in `tests/` talk to a running storefront over HTTP and are
//! ignored by default so `cargo test` stays hermetic.

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
