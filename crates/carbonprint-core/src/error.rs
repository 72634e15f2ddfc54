use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CarbonError {
    #[error("product with barcode {barcode} not found")]
    ProductNotFound { barcode: String },

    #[error("product lookup failed: {0}")]
    ProductLookup(String),

    #[error("invalid scan: {0}")]
    InvalidScan(String),

    #[error("invalid storage key '{0}'. Keys use letters, digits, '-' and '_' (1-64 chars)")]
    InvalidKey(String),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("invalid alternatives catalog: {0}")]
    CatalogInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
