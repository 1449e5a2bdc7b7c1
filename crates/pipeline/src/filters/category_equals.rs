//! Case-insensitive exact match on the product category.

use crate::traits::Specification;
use catalog_loader::Product;

/// Keeps products whose category equals the given one, ignoring case.
/// Partial matches do not count.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEquals {
    category: String,
}

impl CategoryEquals {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_lowercase(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Specification for CategoryEquals {
    fn name(&self) -> &str {
        "CategoryEquals"
    }

    fn is_satisfied_by(&self, product: &Product) -> bool {
        product.category.to_lowercase() == self.category
    }
}
