//! # Catalog Loader Crate
//!
//! This crate owns the product data model and every way of obtaining a
//! catalog snapshot.
//!
//! ## Main Components
//!
//! - **types**: `Product` and `ProductId`
//! - **parser**: Read the JSON catalog into `Vec<Product>`
//! - **source**: The `ProductSource` trait and the file-backed `JsonFileSource`
//! - **index**: `ProductIndex`, an in-memory snapshot with id lookups
//! - **error**: `SourceError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog_loader::{JsonFileSource, ProductSource};
//!
//! let source = JsonFileSource::new("data/productos.json");
//! let products = source.list_all()?;
//! let phone = source.find_by_id(1)?;
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod source;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, SourceError};
pub use index::ProductIndex;
pub use source::{JsonFileSource, ProductSource};
pub use types::{Product, ProductId};
