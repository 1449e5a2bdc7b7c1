//! Parser for the JSON product catalog.
//!
//! The catalog is a single JSON array of product objects. The file is
//! read fully and handed to serde_json; failures are classified into
//! missing file, malformed content and general I/O errors.

use crate::error::{Result, SourceError};
use crate::types::Product;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a catalog from an in-memory JSON document.
///
/// `origin` only labels the error (usually the file path).
pub fn parse_products(content: &str, origin: &str) -> Result<Vec<Product>> {
    serde_json::from_str(content).map_err(|e| SourceError::Malformed {
        path: origin.to_string(),
        reason: e.to_string(),
    })
}

/// Read and parse the catalog file at `path`.
pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    let origin = path.display().to_string();
    tracing::info!("Reading product catalog: {}", origin);

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::FileNotFound {
            path: origin.clone(),
        },
        // Non UTF-8 content is a shape problem, not an I/O one
        ErrorKind::InvalidData => SourceError::Malformed {
            path: origin.clone(),
            reason: e.to_string(),
        },
        _ => SourceError::Io(e),
    })?;

    // A leading byte-order mark is not part of the JSON document
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let products = parse_products(content, &origin)?;
    tracing::info!(
        "Product catalog read successfully: {} products in {}",
        products.len(),
        origin
    );
    Ok(products)
}
