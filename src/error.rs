// Error types for the storefront application.
// Covers settings loading, logging setup, terminal I/O, and catalog lookups.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("No config directory available on this platform")]
    NoConfigDir,

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;
