//! Inclusive price range.
//!
//! Either bound may be absent, meaning unbounded on that side. The
//! composer never builds this filter with both bounds absent.

use crate::traits::Specification;
use catalog_loader::Product;

/// Keeps products with `min <= price <= max`, skipping absent bounds.
///
/// ## Algorithm
/// 1. If `min` is set and price is below it, reject
/// 2. If `max` is set and price is above it, reject
/// 3. Otherwise accept
///
/// A NaN price fails every bounded comparison and is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceInRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceInRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }
}

impl Specification for PriceInRange {
    fn name(&self) -> &str {
        "PriceInRange"
    }

    fn is_satisfied_by(&self, product: &Product) -> bool {
        let price = product.price;
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}
