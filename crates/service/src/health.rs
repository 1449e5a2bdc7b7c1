//! Readiness check for a product source.

use catalog_loader::ProductSource;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub source: String,
    pub total_products: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthReport {
    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}

/// Probe `source` by listing its catalog.
///
/// Up only when the catalog can be read and holds at least one product.
pub fn check(source: &dyn ProductSource) -> HealthReport {
    match source.list_all() {
        Ok(products) if products.is_empty() => HealthReport {
            status: HealthStatus::Down,
            source: source.name().to_string(),
            total_products: 0,
            detail: Some("No se encontraron productos en el repositorio".to_string()),
        },
        Ok(products) => HealthReport {
            status: HealthStatus::Up,
            source: source.name().to_string(),
            total_products: products.len(),
            detail: None,
        },
        Err(e) => {
            tracing::warn!("Health check failed for {}: {}", source.name(), e);
            HealthReport {
                status: HealthStatus::Down,
                source: source.name().to_string(),
                total_products: 0,
                detail: Some(format!("Error al acceder al repositorio de productos: {e}")),
            }
        }
    }
}
