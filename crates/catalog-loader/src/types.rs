//! Core domain types for the product catalog.
//!
//! Field names follow Rust conventions; the serde renames keep the
//! wire keys used by the JSON catalog file.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a product in the catalog (positive in well-formed data)
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry.
///
/// Products are immutable once loaded. Identifier uniqueness is not
/// enforced here; it is a property of whoever produced the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idProducto")]
    pub id: ProductId,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "imagenUrl", default)]
    pub image_url: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// 0.0 when the catalog entry omits it
    #[serde(rename = "precio", default)]
    pub price: f64,
    #[serde(rename = "calificacion", default)]
    pub rating: f64,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "marca", default)]
    pub brand: String,
    /// Free-form specification lines, in display order. May be empty.
    #[serde(rename = "especificaciones", default)]
    pub specifications: Vec<String>,
}

impl Product {
    /// Create a product with the fields the query pipeline looks at.
    ///
    /// Descriptive fields (image, description, rating, brand, specifications)
    /// start empty and can be filled in with struct update syntax.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: String::new(),
            description: String::new(),
            price,
            rating: 0.0,
            category: category.into(),
            brand: String::new(),
            specifications: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uses_catalog_keys() {
        let json = r#"{
            "idProducto": 7,
            "nombre": "Celular Pro",
            "imagenUrl": "https://img/7.png",
            "descripcion": "Gama alta",
            "precio": 1200.5,
            "calificacion": 4.7,
            "categoria": "Electrónica",
            "marca": "Acme",
            "especificaciones": ["128GB", "OLED"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Celular Pro");
        assert_eq!(product.category, "Electrónica");
        assert_eq!(product.price, 1200.5);
        assert_eq!(product.specifications, vec!["128GB", "OLED"]);
    }

    #[test]
    fn test_missing_specifications_default_to_empty() {
        let json = r#"{"idProducto": 1, "nombre": "Tablet", "precio": 10.0}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.specifications.is_empty());
        assert_eq!(product.category, "");
    }

    #[test]
    fn test_missing_name_and_price_default() {
        let product: Product = serde_json::from_str(r#"{"idProducto": 4}"#).unwrap();

        assert_eq!(product.id, 4);
        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"nombre": "Tablet", "precio": 10.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_keeps_catalog_keys() {
        let product = Product::new(3, "Tablet", "Hogar", 300.0);
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["idProducto"], 3);
        assert_eq!(value["nombre"], "Tablet");
        assert_eq!(value["categoria"], "Hogar");
    }
}
