//! The `ProductSource` abstraction and its file-backed implementation.
//!
//! The query layer never touches files directly; it asks a source for a
//! snapshot of the catalog. Each call returns an independent snapshot, so
//! concurrent callers need no coordination.

use crate::error::Result;
use crate::parser;
use crate::types::{Product, ProductId};
use std::path::{Path, PathBuf};

/// Supplier of catalog snapshots.
///
/// `Send + Sync` lets one source be shared behind an `Arc` by every
/// request handler. Only `list_all` is required; the lookups default to a
/// scan of the full snapshot.
pub trait ProductSource: Send + Sync {
    /// Short label for logs and health reports
    fn name(&self) -> &str;

    /// Every product, in catalog order.
    fn list_all(&self) -> Result<Vec<Product>>;

    /// The first product carrying `id`, if any.
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.list_all()?.into_iter().find(|product| product.id == id))
    }

    /// Products whose id appears in `ids`, in catalog order.
    ///
    /// Ids with no matching product are skipped, not reported.
    fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|product| ids.contains(&product.id))
            .collect())
    }
}

/// Reads the JSON catalog from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonFileSource {
    fn name(&self) -> &str {
        "JsonFileSource"
    }

    fn list_all(&self) -> Result<Vec<Product>> {
        parser::read_products(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const CATALOG: &str = r#"[
        {"idProducto": 3, "nombre": "Tablet", "precio": 1800.0},
        {"idProducto": 1, "nombre": "Celular", "precio": 500.0},
        {"idProducto": 2, "nombre": "Celular Pro", "precio": 1200.0}
    ]"#;

    #[test]
    fn test_find_by_id() {
        let file = catalog_file(CATALOG);
        let source = JsonFileSource::new(file.path());

        let product = source.find_by_id(2).unwrap().unwrap();
        assert_eq!(product.name, "Celular Pro");
        assert!(source.find_by_id(99).unwrap().is_none());
    }

    #[test]
    fn test_find_by_ids_keeps_catalog_order_and_skips_missing() {
        let file = catalog_file(CATALOG);
        let source = JsonFileSource::new(file.path());

        let products = source.find_by_ids(&[1, 3, 42]).unwrap();
        let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_every_call_reads_a_fresh_snapshot() {
        let mut file = catalog_file(r#"[{"idProducto": 1, "nombre": "A", "precio": 1.0}]"#);
        let source = JsonFileSource::new(file.path());
        assert_eq!(source.list_all().unwrap().len(), 1);

        file.as_file_mut().set_len(0).unwrap();
        let mut handle = file.reopen().unwrap();
        handle.write_all(CATALOG.as_bytes()).unwrap();

        assert_eq!(source.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_file_propagates_from_lookups() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));

        assert!(matches!(
            source.find_by_id(1),
            Err(SourceError::FileNotFound { .. })
        ));
        assert!(matches!(
            source.find_by_ids(&[1, 2]),
            Err(SourceError::FileNotFound { .. })
        ));
    }
}
