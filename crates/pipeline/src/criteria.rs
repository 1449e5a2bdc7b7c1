//! Search criteria for listing products.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// First page index used when the caller does not ask for one
pub const DEFAULT_PAGE: usize = 0;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// What to filter on and which page to return.
///
/// Every filter field is independently optional; `None` means "do not
/// filter on this attribute", which is different from a filter that
/// happens to match everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the product name
    pub name: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub price_min: Option<f64>,
    /// Inclusive upper price bound
    pub price_max: Option<f64>,
    /// Zero-based page index
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl SearchCriteria {
    /// Criteria with no filters for the given page.
    pub fn new(page: usize, page_size: NonZeroUsize) -> Self {
        Self {
            name: None,
            category: None,
            price_min: None,
            price_max: None,
            page,
            page_size,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_min(mut self, price_min: f64) -> Self {
        self.price_min = Some(price_min);
        self
    }

    pub fn with_price_max(mut self, price_max: f64) -> Self {
        self.price_max = Some(price_max);
        self
    }

    /// True when no filter field is set.
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}
