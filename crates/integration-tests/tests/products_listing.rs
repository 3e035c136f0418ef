//! Integration tests for the product listing page.
//!
//! These tests require:
//! - A running storefront (cargo run -p garimpo-storefront)
//! - A reachable catalog API behind `CATALOG_API_URL`
//!
//! Run with: cargo test -p garimpo-integration-tests -- --ignored

use garimpo_integration_tests::storefront_base_url;
use reqwest::StatusCode;

#[tokio::test]
#[ignore = "Requires running storefront and catalog API"]
async fn test_health_endpoints() {
    let base_url = storefront_base_url();
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach storefront");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to reach storefront");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront and catalog API"]
async fn test_listing_page_renders_grid() {
    let base_url = storefront_base_url();

    let resp = reqwest::get(format!("{base_url}/products"))
        .await
        .expect("Failed to get products page");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("product-grid") || body.contains("No products match"));
    assert!(body.contains("Filter by"));
}

#[tokio::test]
#[ignore = "Requires running storefront and catalog API"]
async fn test_listing_page_with_filters() {
    let base_url = storefront_base_url();
    let client = reqwest::Client::new();

    // Category filter
    let resp = client
        .get(format!("{base_url}/products?categories=Cal%C3%A7ados"))
        .send()
        .await
        .expect("Failed to get filtered page");
    assert_eq!(resp.status(), StatusCode::OK);

    // Combined refine control
    let resp = client
        .get(format!("{base_url}/products?refine=price_asc"))
        .send()
        .await
        .expect("Failed to get sorted page");
    assert_eq!(resp.status(), StatusCode::OK);

    // Paging past the end still renders (empty grid, not an error)
    let resp = client
        .get(format!("{base_url}/products?page=9999"))
        .send()
        .await
        .expect("Failed to get out-of-range page");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront and catalog API"]
async fn test_route_category_prefilters_listing() {
    let base_url = storefront_base_url();

    let resp = reqwest::get(format!("{base_url}/products/shoes"))
        .await
        .expect("Failed to get category page");
    assert_eq!(resp.status(), StatusCode::OK);
}
