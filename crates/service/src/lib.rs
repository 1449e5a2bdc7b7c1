//! Catalog service crate.
//!
//! This crate wires a `ProductSource` to the query pipeline and exposes
//! the catalog queries, their error taxonomy and a health check.

pub mod catalog;
pub mod error;
pub mod health;

pub use catalog::{BatchLimits, CatalogService, MAX_BATCH_IDS, MIN_BATCH_IDS};
pub use error::{ErrorKind, QueryError, Result};
pub use health::{HealthReport, HealthStatus};
