//! Case-insensitive substring match on the product name.

use crate::traits::Specification;
use catalog_loader::Product;

/// Keeps products whose name contains the given text, ignoring case.
///
/// The needle is lower-cased once at construction; each product name is
/// lower-cased on evaluation. No trimming or other normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NameContains {
    needle: String,
}

impl NameContains {
    pub fn new(name: &str) -> Self {
        Self {
            needle: name.to_lowercase(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl Specification for NameContains {
    fn name(&self) -> &str {
        "NameContains"
    }

    fn is_satisfied_by(&self, product: &Product) -> bool {
        product.name.to_lowercase().contains(&self.needle)
    }
}
