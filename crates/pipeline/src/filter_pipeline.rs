//! The FilterPipeline composes product predicates.
//!
//! A pipeline is either assembled by hand with the builder methods or
//! derived from `SearchCriteria`, which fixes the predicate order to
//! name, category, price range.

use crate::criteria::SearchCriteria;
use crate::filters::{CategoryEquals, NameContains, Predicate, PriceInRange};
use crate::traits::Specification;
use catalog_loader::Product;

/// Ordered list of predicates combined with logical AND.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::from_criteria(&criteria);
/// let survivors = pipeline.apply(products);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPipeline {
    predicates: Vec<Predicate>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Build the predicate list for `criteria`.
    ///
    /// - `name` present: NameContains
    /// - `category` present: CategoryEquals
    /// - either price bound present: one PriceInRange carrying both bounds
    ///
    /// Absent fields contribute nothing, so empty criteria give an empty
    /// pipeline that keeps every product.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let mut pipeline = Self::new();

        if let Some(name) = &criteria.name {
            pipeline = pipeline.add_filter(NameContains::new(name));
        }
        if let Some(category) = &criteria.category {
            pipeline = pipeline.add_filter(CategoryEquals::new(category));
        }
        if criteria.price_min.is_some() || criteria.price_max.is_some() {
            pipeline =
                pipeline.add_filter(PriceInRange::new(criteria.price_min, criteria.price_max));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Into<Predicate>) -> Self {
        self.predicates.push(filter.into());
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether `product` satisfies every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.is_satisfied_by(product))
    }

    /// Narrow `products` by each predicate in turn.
    ///
    /// Survivors are exactly the products satisfying all predicates, in
    /// their original relative order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut current = products;
        for predicate in &self.predicates {
            let input_count = current.len();
            current.retain(|product| predicate.is_satisfied_by(product));
            tracing::debug!(
                "Filter applied: {} (input count: {}, output count: {})",
                predicate.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}
