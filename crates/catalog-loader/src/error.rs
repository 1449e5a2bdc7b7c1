//! Error types for the catalog-loader crate.
//!
//! Every failure a product source can report is one of these variants.
//! The service layer folds them into its own query taxonomy.

use thiserror::Error;

/// Errors that can occur while reading the product catalog
#[derive(Error, Debug)]
pub enum SourceError {
    /// The backing catalog file does not exist
    #[error("No se encontró el archivo de productos: {path}")]
    FileNotFound { path: String },

    /// The catalog was read but could not be parsed into products
    #[error("Error al parsear el JSON de productos ({path}): {reason}")]
    Malformed { path: String, reason: String },

    /// Any other I/O failure while reading the catalog
    #[error("Error al leer productos desde JSON: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SourceError>;
