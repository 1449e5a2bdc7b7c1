//! Failure taxonomy of catalog queries.

use catalog_loader::{ProductId, SourceError};
use thiserror::Error;

/// Every way a catalog query can fail.
///
/// Messages are the ones shown to catalog users; `title()` gives the
/// short heading a presentation layer puts above them.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The product data could not be located at all
    #[error("No se encontró el archivo de productos: {path}")]
    SourceUnavailable { path: String },

    /// The product data exists but is not a valid catalog
    #[error("Error al parsear el JSON de productos: {reason}")]
    SourceCorrupt { reason: String },

    #[error("No fue posible encontrar el producto {id}")]
    NotFound { id: ProductId },

    /// Structural problem with a batch id list
    #[error("{0}")]
    InvalidParameters(String),

    #[error("La cantidad de IDs debe estar entre {min} y {max}, pero se recibieron {received}")]
    InvalidCount {
        min: usize,
        max: usize,
        received: usize,
    },

    #[error("{0}")]
    Unexpected(String),
}

/// Discriminant of `QueryError`, for callers that only need the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceUnavailable,
    SourceCorrupt,
    NotFound,
    InvalidParameters,
    InvalidCount,
    Unexpected,
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            QueryError::SourceCorrupt { .. } => ErrorKind::SourceCorrupt,
            QueryError::NotFound { .. } => ErrorKind::NotFound,
            QueryError::InvalidParameters(_) => ErrorKind::InvalidParameters,
            QueryError::InvalidCount { .. } => ErrorKind::InvalidCount,
            QueryError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind() {
            ErrorKind::SourceUnavailable => "Fuente de datos no disponible",
            ErrorKind::SourceCorrupt => "Datos de productos inválidos",
            ErrorKind::NotFound => "Producto no encontrado",
            ErrorKind::InvalidParameters => "Parámetros inválidos",
            ErrorKind::InvalidCount => "Cantidad de IDs inválida",
            ErrorKind::Unexpected => "Error interno del servidor",
        }
    }
}

impl From<SourceError> for QueryError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::FileNotFound { path } => QueryError::SourceUnavailable { path },
            SourceError::Malformed { reason, .. } => QueryError::SourceCorrupt { reason },
            io @ SourceError::Io(_) => QueryError::Unexpected(io.to_string()),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
