//! Filter implementations for the product pipeline.
//!
//! The set of filters is closed, so the pipeline stores them as the
//! `Predicate` sum type instead of boxed trait objects.

pub mod category_equals;
pub mod name_contains;
pub mod price_in_range;

// Re-export for convenience
pub use category_equals::CategoryEquals;
pub use name_contains::NameContains;
pub use price_in_range::PriceInRange;

use crate::traits::Specification;
use catalog_loader::Product;

/// One of the supported product filters.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    NameContains(NameContains),
    CategoryEquals(CategoryEquals),
    PriceInRange(PriceInRange),
}

impl Specification for Predicate {
    fn name(&self) -> &str {
        match self {
            Predicate::NameContains(spec) => spec.name(),
            Predicate::CategoryEquals(spec) => spec.name(),
            Predicate::PriceInRange(spec) => spec.name(),
        }
    }

    fn is_satisfied_by(&self, product: &Product) -> bool {
        match self {
            Predicate::NameContains(spec) => spec.is_satisfied_by(product),
            Predicate::CategoryEquals(spec) => spec.is_satisfied_by(product),
            Predicate::PriceInRange(spec) => spec.is_satisfied_by(product),
        }
    }
}

impl From<NameContains> for Predicate {
    fn from(spec: NameContains) -> Self {
        Predicate::NameContains(spec)
    }
}

impl From<CategoryEquals> for Predicate {
    fn from(spec: CategoryEquals) -> Self {
        Predicate::CategoryEquals(spec)
    }
}

impl From<PriceInRange> for Predicate {
    fn from(spec: PriceInRange) -> Self {
        Predicate::PriceInRange(spec)
    }
}
