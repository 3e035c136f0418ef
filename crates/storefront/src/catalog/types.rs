//! Domain types for the catalog API.
//!
//! These mirror the JSON shape served by the catalog service. Records are
//! immutable once fetched; the listing engine only ever copies them.

use garimpo_core::{Condition, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category label (e.g., "Moda Masculina"). May arrive URL-encoded.
    pub category: String,
    /// Price in the store currency.
    pub price: Price,
    /// Whether the item is new or secondhand.
    pub condition: Condition,
    /// Image URL, if the catalog provides one.
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_product_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 7,
            "name": "Vintage Denim Jacket",
            "category": "Moda Masculina",
            "price": 89.9,
            "condition": "Used",
            "image": "https://cdn.garimpo.store/7.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.name, "Vintage Denim Jacket");
        assert_eq!(product.condition, Condition::Used);
        assert_eq!(product.price, Price::new(Decimal::new(899, 1)));
        assert_eq!(
            product.image.as_deref(),
            Some("https://cdn.garimpo.store/7.jpg")
        );
    }

    #[test]
    fn test_product_image_is_optional() {
        let json = r#"{
            "id": 1,
            "name": "Belt",
            "category": "Acessórios",
            "price": 15,
            "condition": "New"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.image.is_none());
    }
}
