//! In-memory catalog snapshot.
//!
//! `ProductIndex` keeps products in catalog order and maintains an
//! id -> position map so single lookups are O(1). It is the source used
//! by tests and by callers that load the catalog once up front.

use crate::error::Result;
use crate::parser;
use crate::source::ProductSource;
use crate::types::{Product, ProductId};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct ProductIndex {
    products: Vec<Product>,
    /// Position of the first product carrying each id
    positions: HashMap<ProductId, usize>,
}

impl ProductIndex {
    /// Creates a new, empty ProductIndex
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut index = Self::new();
        for product in products {
            index.insert_product(product);
        }
        index
    }

    /// Load the whole catalog file once into memory.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let products = parser::read_products(path)?;
        Ok(Self::from_products(products))
    }

    /// Append a product, keeping catalog order.
    ///
    /// A repeated id is stored but lookups keep answering with the first one.
    pub fn insert_product(&mut self, product: Product) {
        let position = self.products.len();
        self.positions.entry(product.id).or_insert(position);
        self.products.push(product);
    }

    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.positions.get(&id).map(|&pos| &self.products[pos])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductSource for ProductIndex {
    fn name(&self) -> &str {
        "ProductIndex"
    }

    fn list_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.get_product(id).cloned())
    }
}
