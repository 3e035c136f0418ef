//! Product listing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::types::Product;
use crate::filters;
use crate::listing::{self, ListingSelection, Refinement};
use crate::state::AppState;

/// Positions of the combined refine select, in display order.
const REFINE_OPTIONS: &[(&str, &str)] = &[
    ("price_asc", "Price: Low to High"),
    ("price_desc", "Price: High to Low"),
    ("New", "New"),
    ("Used", "Used"),
];

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Comma-separated selected category labels.
    pub categories: Option<String>,
    /// Combined condition/sort control value.
    pub refine: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size override.
    pub per_page: Option<usize>,
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub name: String,
    pub category: String,
    pub price: String,
    pub condition: &'static str,
    pub image: Option<String>,
    pub detail_url: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: listing::display_label(&product.category),
            price: product.price.display(),
            condition: product.condition.as_str(),
            image: product.image.clone(),
            detail_url: format!("/product/{}", product.id),
        }
    }
}

/// A category checkbox in the filter sidebar.
pub struct CategoryOption {
    pub label: String,
    pub selected: bool,
    pub url: String,
}

/// One option of the refine select.
pub struct RefineOption {
    pub label: &'static str,
    pub selected: bool,
    pub url: String,
}

/// A page button.
pub struct PageLink {
    pub number: usize,
    pub current: bool,
    pub url: String,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<CategoryOption>,
    pub refinements: Vec<RefineOption>,
    pub pages: Vec<PageLink>,
    pub total_items: usize,
    pub error: Option<String>,
}

/// Redirect the root path to the product listing.
pub async fn home() -> Redirect {
    Redirect::permanent("/products")
}

/// Display the product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let selection =
        ListingSelection::from_parts(query.categories.as_deref(), query.refine.as_deref());
    render_listing(&state, selection, &query).await
}

/// Display the product listing pre-filtered by a route category.
///
/// The path segment is capitalized and applied as the sole selected
/// category, with no validation against known categories. An explicit
/// selection in the query string takes precedence.
#[instrument(skip(state))]
pub async fn index_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let mut selection =
        ListingSelection::from_parts(query.categories.as_deref(), query.refine.as_deref());
    if selection.categories.is_empty() {
        selection.categories = vec![listing::capitalize_first(&category)];
    }
    render_listing(&state, selection, &query).await
}

/// Fetch the catalog and render the listing, or the error state when the
/// fetch fails.
async fn render_listing(
    state: &AppState,
    selection: ListingSelection,
    query: &ListingQuery,
) -> Response {
    match state.catalog().products().await {
        Ok(catalog) => {
            listing_template(state.config().products_per_page, &selection, query, &catalog)
                .into_response()
        }
        Err(e) => {
            sentry::capture_error(&e);
            tracing::error!("Failed to fetch catalog: {e}");
            error_template("Could not load products. Please try again later.").into_response()
        }
    }
}

/// Build the listing template from the fetched catalog.
fn listing_template(
    default_per_page: usize,
    selection: &ListingSelection,
    query: &ListingQuery,
    catalog: &[Product],
) -> ProductsIndexTemplate {
    let per_page = query.per_page.unwrap_or(default_per_page).max(1);
    let requested_page = query.page.unwrap_or(1);
    // Keep links canonical: an explicit per_page equal to the default is
    // not carried along, matching the page-1 omission in the URL builders
    let per_page_param = query.per_page.filter(|&size| size != default_per_page);

    let filtered = selection.apply(catalog);
    let page = listing::paginate(filtered, requested_page, per_page);

    let categories = listing::distinct_categories(catalog)
        .into_iter()
        .map(|label| CategoryOption {
            selected: selection.is_selected(&label),
            url: listing::toggle_category_url(selection, &label, per_page_param),
            label,
        })
        .collect();

    let current_refine = selection.refinement().map(Refinement::as_str);
    let refinements = REFINE_OPTIONS
        .iter()
        .map(|&(value, label)| RefineOption {
            label,
            selected: current_refine == Some(value),
            url: listing::refine_url(selection, Refinement::parse(value), per_page_param),
        })
        .collect();

    let pages = (1..=page.total_pages)
        .map(|number| PageLink {
            number,
            current: number == page.current_page,
            url: listing::page_url(selection, number, per_page_param),
        })
        .collect();

    ProductsIndexTemplate {
        products: page.items.iter().map(ProductCardView::from).collect(),
        categories,
        refinements,
        pages,
        total_items: page.total_items,
        error: None,
    }
}

/// Build the listing template for a failed catalog fetch.
fn error_template(message: &str) -> ProductsIndexTemplate {
    ProductsIndexTemplate {
        products: Vec::new(),
        categories: Vec::new(),
        refinements: Vec::new(),
        pages: Vec::new(),
        total_items: 0,
        error: Some(message.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use garimpo_core::{Condition, Price, ProductId};
    use rust_decimal::Decimal;

    fn product(id: i64, name: &str, category: &str, price: i64, condition: Condition) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price: Price::new(Decimal::new(price, 2)),
            condition,
            image: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Denim Jacket", "Moda Masculina", 8990, Condition::Used),
            product(2, "Leather Boots", "Calçados", 12000, Condition::Used),
            product(3, "Silk Scarf", "Acessórios", 2550, Condition::New),
        ]
    }

    #[test]
    fn test_listing_template_renders_product_grid() {
        let template = listing_template(
            16,
            &ListingSelection::default(),
            &ListingQuery::default(),
            &sample_catalog(),
        );
        let html = template.render().unwrap();

        assert!(html.contains("product-grid"));
        assert!(html.contains("Denim Jacket"));
        assert!(html.contains("$89.90"));
        assert!(html.contains("Used"));
    }

    #[test]
    fn test_error_template_shows_message_and_no_grid() {
        let template = error_template("Could not load products. Please try again later.");
        let html = template.render().unwrap();

        assert!(html.contains("Could not load products"));
        assert!(!html.contains("product-grid"));
    }

    #[test]
    fn test_listing_template_marks_selected_category() {
        let selection = ListingSelection::from_parts(Some("Calçados"), None);
        let template = listing_template(
            16,
            &selection,
            &ListingQuery::default(),
            &sample_catalog(),
        );

        let shoes = template
            .categories
            .iter()
            .find(|option| option.label == "Calçados")
            .unwrap();
        assert!(shoes.selected);
        // Toggling the selected category removes it, so its URL drops the filter
        assert!(!shoes.url.contains("categories="));
    }

    #[test]
    fn test_listing_template_generates_all_page_buttons() {
        let catalog: Vec<Product> = (1..=20)
            .map(|i| product(i, "Item", "Clothing", 1000 + i, Condition::New))
            .collect();

        let query = ListingQuery {
            per_page: Some(6),
            page: Some(2),
            ..Default::default()
        };
        let template = listing_template(16, &ListingSelection::default(), &query, &catalog);

        assert_eq!(template.pages.len(), 4);
        assert_eq!(template.products.len(), 6);
        let current: Vec<usize> = template
            .pages
            .iter()
            .filter(|link| link.current)
            .map(|link| link.number)
            .collect();
        assert_eq!(current, vec![2]);
        // Page links carry the page size override along
        assert!(template.pages.iter().all(|link| link.url.contains("per_page=6")));
    }

    #[test]
    fn test_listing_template_survives_huge_page_number() {
        let query = ListingQuery {
            page: Some(usize::MAX),
            ..Default::default()
        };
        let template = listing_template(
            16,
            &ListingSelection::default(),
            &query,
            &sample_catalog(),
        );
        assert!(template.products.is_empty());
        assert_eq!(template.total_items, 3);
    }

    #[test]
    fn test_default_page_size_is_not_carried_in_links() {
        let catalog: Vec<Product> = (1..=20)
            .map(|i| product(i, "Item", "Clothing", 1000 + i, Condition::New))
            .collect();

        let query = ListingQuery {
            per_page: Some(16),
            ..Default::default()
        };
        let template = listing_template(16, &ListingSelection::default(), &query, &catalog);

        assert_eq!(template.pages.len(), 2);
        assert!(template.pages.iter().all(|link| !link.url.contains("per_page=")));
        assert!(
            template
                .categories
                .iter()
                .all(|option| !option.url.contains("per_page="))
        );
    }

    #[test]
    fn test_listing_template_beyond_last_page_is_empty() {
        let query = ListingQuery {
            page: Some(99),
            ..Default::default()
        };
        let template = listing_template(
            16,
            &ListingSelection::default(),
            &query,
            &sample_catalog(),
        );
        assert!(template.products.is_empty());
        assert_eq!(template.total_items, 3);
    }

    #[test]
    fn test_product_card_view_links_to_detail() {
        let card = ProductCardView::from(&product(7, "Hat", "Acessórios", 500, Condition::New));
        assert_eq!(card.detail_url, "/product/7");
        assert_eq!(card.price, "$5.00");
        assert_eq!(card.condition, "New");
    }
}
