//! Query evaluation for the product catalog.
//!
//! This crate provides:
//! - Specification trait and the product predicates
//! - SearchCriteria describing a listing request
//! - FilterPipeline, which turns criteria into predicates and applies them
//! - Pagination of the surviving products into a PagedResult
//!
//! ## Architecture
//! criteria -> predicate list -> filtered list -> page slice -> PagedResult
//!
//! Nothing here holds state between calls; every step is a pure function
//! of its inputs.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{paginate, FilterPipeline, SearchCriteria};
//!
//! let criteria = SearchCriteria::default().with_name("celular");
//! let survivors = FilterPipeline::from_criteria(&criteria).apply(products);
//! let page = paginate(survivors, criteria.page, criteria.page_size);
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod traits;

// Re-export main types
pub use criteria::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, SearchCriteria};
pub use filter_pipeline::FilterPipeline;
pub use filters::Predicate;
pub use pagination::{PagedResult, paginate};
pub use traits::Specification;

use catalog_loader::Product;

/// Filter `products` by `criteria` and return the requested page.
pub fn evaluate(products: Vec<Product>, criteria: &SearchCriteria) -> PagedResult<Product> {
    let survivors = FilterPipeline::from_criteria(criteria).apply(products);
    paginate(survivors, criteria.page, criteria.page_size)
}
