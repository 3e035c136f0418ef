//! Listing derivation: filtering, sorting, and pagination.
//!
//! Everything here is pure. A listing page is a deterministic function of
//! (raw catalog, selection, page, page size): the handler fetches the
//! catalog, applies the [`ListingSelection`], slices the result with
//! [`paginate`], and renders. Products are never mutated.
//!
//! Filter state travels in the query string, so "changing a filter resets
//! the page" is a property of the URL builders: every link that changes the
//! selection is built without a `page` parameter.

use std::borrow::Cow;
use std::collections::BTreeMap;

use garimpo_core::Condition;

use crate::catalog::types::Product;

/// Price sort order for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSort {
    Ascending,
    Descending,
}

impl PriceSort {
    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price_asc" => Some(Self::Ascending),
            "price_desc" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "price_asc",
            Self::Descending => "price_desc",
        }
    }
}

/// One position of the combined refine control.
///
/// The UI exposes condition filtering and price sorting through a single
/// select, so picking a sort clears the condition and vice versa. The
/// engine itself does not care: [`ListingSelection::apply`] handles both
/// fields independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refinement {
    Condition(Condition),
    Sort(PriceSort),
}

impl Refinement {
    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(sort) = PriceSort::parse(s) {
            return Some(Self::Sort(sort));
        }
        s.parse::<Condition>().ok().map(Self::Condition)
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Condition(condition) => condition.as_str(),
            Self::Sort(sort) => sort.as_str(),
        }
    }
}

/// Active filter and sort state for a listing page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingSelection {
    /// Selected category labels, as they appear in the URL. Membership is
    /// unordered; comparison is normalized.
    pub categories: Vec<String>,
    /// Condition filter, if active.
    pub condition: Option<Condition>,
    /// Price sort, if active.
    pub sort: Option<PriceSort>,
}

impl ListingSelection {
    /// Build a selection from the raw query parameters.
    ///
    /// `categories` is a comma-separated list of labels; `refine` is the
    /// combined condition/sort control value. Unknown refine values are
    /// ignored.
    ///
    /// The query value arrives percent-decoded, so a comma always acts as a
    /// separator; a label cannot itself contain one.
    #[must_use]
    pub fn from_parts(categories: Option<&str>, refine: Option<&str>) -> Self {
        let categories = categories
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let selection = Self {
            categories,
            condition: None,
            sort: None,
        };

        match refine.and_then(Refinement::parse) {
            Some(refinement) => selection.with_refinement(Some(refinement)),
            None => selection,
        }
    }

    /// Whether no filter and no sort is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.categories.is_empty() && self.condition.is_none() && self.sort.is_none()
    }

    /// Whether the given category label is currently selected (normalized
    /// comparison).
    #[must_use]
    pub fn is_selected(&self, category: &str) -> bool {
        let wanted = normalize_category(category);
        self.categories
            .iter()
            .any(|selected| normalize_category(selected) == wanted)
    }

    /// Return a copy with the given category toggled.
    #[must_use]
    pub fn with_category_toggled(&self, category: &str) -> Self {
        let mut toggled = self.clone();
        if self.is_selected(category) {
            let wanted = normalize_category(category);
            toggled
                .categories
                .retain(|selected| normalize_category(selected) != wanted);
        } else {
            toggled.categories.push(category.to_string());
        }
        toggled
    }

    /// Return a copy with the combined refine control set.
    ///
    /// Setting a condition clears the sort and vice versa, mirroring the
    /// single UI control. `None` clears both.
    #[must_use]
    pub fn with_refinement(&self, refinement: Option<Refinement>) -> Self {
        let mut refined = self.clone();
        match refinement {
            Some(Refinement::Condition(condition)) => {
                refined.condition = Some(condition);
                refined.sort = None;
            }
            Some(Refinement::Sort(sort)) => {
                refined.sort = Some(sort);
                refined.condition = None;
            }
            None => {
                refined.condition = None;
                refined.sort = None;
            }
        }
        refined
    }

    /// The current refine control value, if any.
    #[must_use]
    pub fn refinement(&self) -> Option<Refinement> {
        self.condition
            .map(Refinement::Condition)
            .or(self.sort.map(Refinement::Sort))
    }

    /// Derive the filtered, sorted view of the catalog.
    ///
    /// Order of operations: category narrowing, condition narrowing, then a
    /// stable price sort. With an empty selection the input comes back
    /// unchanged and in its original order. Unmatched categories produce an
    /// empty list, never an error.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut filtered: Vec<Product> = if self.categories.is_empty() {
            products.to_vec()
        } else {
            let wanted: Vec<String> = self
                .categories
                .iter()
                .map(|label| normalize_category(label))
                .collect();
            products
                .iter()
                .filter(|product| wanted.contains(&normalize_category(&product.category)))
                .cloned()
                .collect()
        };

        if let Some(condition) = self.condition {
            filtered.retain(|product| product.condition == condition);
        }

        // sort_by is stable, so ties keep their relative order
        match self.sort {
            Some(PriceSort::Ascending) => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(PriceSort::Descending) => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
            None => {}
        }

        filtered
    }
}

/// A page of a derived listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the current page.
    pub items: Vec<T>,
    /// 1-based page number (clamped to at least 1).
    pub current_page: usize,
    /// `ceil(total_items / per_page)`.
    pub total_pages: usize,
    /// Total items across all pages.
    pub total_items: usize,
}

/// Slice a derived listing into the requested page.
///
/// Page numbers are 1-based; page 0 is treated as page 1. A page past the
/// end of the list yields an empty page, not an error. `per_page` is
/// clamped to at least 1.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    // page comes straight from the query string; the skip count must not
    // overflow for absurd page numbers
    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Page {
        items,
        current_page: page,
        total_pages,
        total_items,
    }
}

// =============================================================================
// Category Label Handling
// =============================================================================

/// Normalize a category label for comparison: URL-decode, trim, lowercase.
///
/// Catalog data occasionally carries percent-encoded labels, and route
/// parameters arrive in whatever casing the link used.
fn normalize_category(raw: &str) -> String {
    decode_label(raw).trim().to_lowercase()
}

/// URL-decode a category label for display, keeping its original casing.
#[must_use]
pub fn display_label(raw: &str) -> String {
    decode_label(raw).trim().to_string()
}

fn decode_label(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Capitalize the first letter of a route-supplied category name.
///
/// Matches how category links are written ("/products/shoes" selects
/// "Shoes"). No validation against known categories.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Distinct category labels present in the catalog, sorted by their
/// normalized form. The first spelling seen wins for display.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut by_normalized: BTreeMap<String, String> = BTreeMap::new();
    for product in products {
        by_normalized
            .entry(normalize_category(&product.category))
            .or_insert_with(|| display_label(&product.category));
    }
    by_normalized.into_values().collect()
}

// =============================================================================
// URL Builders
// =============================================================================

/// Base path of the listing page.
const LISTING_PATH: &str = "/products";

/// Build a listing URL for the given state.
///
/// `page: None` means page 1 — the parameter is also omitted when the page
/// is 1, so filter links and first-page links stay canonical.
#[must_use]
pub fn listing_url(
    selection: &ListingSelection,
    page: Option<usize>,
    per_page: Option<usize>,
) -> String {
    let mut params: Vec<String> = Vec::new();

    if !selection.categories.is_empty() {
        let joined = selection
            .categories
            .iter()
            .map(|label| urlencoding::encode(label).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        params.push(format!("categories={joined}"));
    }

    if let Some(refinement) = selection.refinement() {
        params.push(format!("refine={}", refinement.as_str()));
    }

    if let Some(page) = page.filter(|&p| p > 1) {
        params.push(format!("page={page}"));
    }

    if let Some(per_page) = per_page {
        params.push(format!("per_page={per_page}"));
    }

    if params.is_empty() {
        LISTING_PATH.to_string()
    } else {
        format!("{LISTING_PATH}?{}", params.join("&"))
    }
}

/// URL that toggles a category. Resets to page 1.
#[must_use]
pub fn toggle_category_url(
    selection: &ListingSelection,
    category: &str,
    per_page: Option<usize>,
) -> String {
    listing_url(&selection.with_category_toggled(category), None, per_page)
}

/// URL that sets the combined refine control. Resets to page 1.
#[must_use]
pub fn refine_url(
    selection: &ListingSelection,
    refinement: Option<Refinement>,
    per_page: Option<usize>,
) -> String {
    listing_url(&selection.with_refinement(refinement), None, per_page)
}

/// URL for a page button. Keeps the current selection.
#[must_use]
pub fn page_url(selection: &ListingSelection, page: usize, per_page: Option<usize>) -> String {
    listing_url(selection, Some(page), per_page)
}
