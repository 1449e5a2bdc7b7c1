//! # Catalog Service
//!
//! Entry point for the three catalog queries:
//! 1. List products with optional filters and pagination
//! 2. Fetch one product by id
//! 3. Fetch a small batch of products by id
//!
//! The service is stateless apart from its shared source and batch
//! limits. Every call takes a fresh snapshot from the source, so the
//! service can be cloned into concurrent handlers freely.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use catalog_loader::{Product, ProductId, ProductSource};
use pipeline::{PagedResult, SearchCriteria};

use crate::error::{QueryError, Result};

/// Smallest batch accepted by `get_products_by_ids`
pub const MIN_BATCH_IDS: usize = 2;

/// Largest batch accepted by `get_products_by_ids`
pub const MAX_BATCH_IDS: usize = 5;

pub const ERR_NULL_IDS: &str = "La lista de IDs no puede ser nula";
pub const ERR_EMPTY_IDS: &str = "La lista de IDs no puede estar vacía";
pub const ERR_NON_POSITIVE_IDS: &str = "Todos los IDs deben ser mayores a 0";

/// Inclusive range of ids allowed in one batch lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    pub min: usize,
    pub max: usize,
}

impl BatchLimits {
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self {
            min: MIN_BATCH_IDS,
            max: MAX_BATCH_IDS,
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn ProductSource>,
    batch_limits: BatchLimits,
}

impl CatalogService {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self {
            source,
            batch_limits: BatchLimits::default(),
        }
    }

    pub fn with_batch_limits(mut self, batch_limits: BatchLimits) -> Self {
        self.batch_limits = batch_limits;
        self
    }

    pub fn batch_limits(&self) -> BatchLimits {
        self.batch_limits
    }

    pub fn source(&self) -> &dyn ProductSource {
        self.source.as_ref()
    }

    /// Filter the catalog by `criteria` and return the requested page.
    ///
    /// Source failures abort the whole query; there are no partial results.
    pub fn list_products(&self, criteria: &SearchCriteria) -> Result<PagedResult<Product>> {
        let start_time = Instant::now();

        let products = self.load_snapshot()?;
        let catalog_size = products.len();

        let result = pipeline::evaluate(products, criteria);
        info!(
            "Listed products: catalog={}, matched={}, page={}/{}, returned={} in {:.2?}",
            catalog_size,
            result.total_elements,
            result.page,
            result.total_pages,
            result.elements.len(),
            start_time.elapsed()
        );
        Ok(result)
    }

    /// The product with identifier `id`.
    pub fn get_product(&self, id: ProductId) -> Result<Product> {
        let found = self.source.find_by_id(id).map_err(|e| self.source_failure(e))?;
        found.ok_or_else(|| {
            warn!("Product not found: {}", id);
            QueryError::NotFound { id }
        })
    }

    /// Products for a batch of ids, after validating the batch shape.
    ///
    /// `None` stands for an absent list and `None` entries for absent ids.
    /// Checks run in order and stop at the first violation:
    /// 1. list present
    /// 2. list not empty
    /// 3. every id present and > 0
    /// 4. length within the batch limits
    ///
    /// The source is only consulted once all checks pass. Ids with no
    /// matching product are silently left out of the result.
    pub fn get_products_by_ids(&self, ids: Option<&[Option<ProductId>]>) -> Result<Vec<Product>> {
        let ids = self.validate_ids(ids).inspect_err(|e| {
            warn!("Rejected batch lookup: {}", e);
        })?;

        let products = self
            .source
            .find_by_ids(&ids)
            .map_err(|e| self.source_failure(e))?;
        info!(
            "Batch lookup: requested={}, found={}",
            ids.len(),
            products.len()
        );
        Ok(products)
    }

    fn validate_ids(&self, ids: Option<&[Option<ProductId>]>) -> Result<Vec<ProductId>> {
        let ids = ids.ok_or_else(|| QueryError::InvalidParameters(ERR_NULL_IDS.to_string()))?;

        if ids.is_empty() {
            return Err(QueryError::InvalidParameters(ERR_EMPTY_IDS.to_string()));
        }

        let valid: Vec<ProductId> = ids
            .iter()
            .copied()
            .map(|id| id.filter(|&id| id > 0))
            .collect::<Option<_>>()
            .ok_or_else(|| QueryError::InvalidParameters(ERR_NON_POSITIVE_IDS.to_string()))?;

        if !self.batch_limits.contains(valid.len()) {
            return Err(QueryError::InvalidCount {
                min: self.batch_limits.min,
                max: self.batch_limits.max,
                received: valid.len(),
            });
        }

        Ok(valid)
    }

    fn load_snapshot(&self) -> Result<Vec<Product>> {
        self.source.list_all().map_err(|e| self.source_failure(e))
    }

    fn source_failure(&self, err: catalog_loader::SourceError) -> QueryError {
        error!("Product source {} failed: {}", self.source.name(), err);
        err.into()
    }
}
