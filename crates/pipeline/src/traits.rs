//! Core traits for the filtering pipeline.
//!
//! This module defines the Specification trait: a reusable boolean
//! condition over a single product.

use catalog_loader::Product;

/// A condition a product either satisfies or not.
///
/// Implementations hold only their comparison operands and have no side
/// effects, so they can be evaluated from any thread.
pub trait Specification: Send + Sync {
    /// Returns the name of this specification (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `product` meets this condition.
    fn is_satisfied_by(&self, product: &Product) -> bool;
}
