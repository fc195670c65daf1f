//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type for everything that can fail at
//! the edges of the storefront: configuration, catalog loading and checkout.
//! Cart operations and product filtering never fail.

use std::path::PathBuf;

use thiserror::Error;
use toyclub_core::CatalogError;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog data is invalid.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout could not be completed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Product is not in the catalog.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
