//! Integration tests for the ToyClub storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p toyclub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart store behavior through a storefront session
//! - `product_filters` - Filter pipeline over the bundled catalog
//! - `checkout` - Order message and WhatsApp handoff
//!
//! Shared fixtures live here so each test file builds sessions the same way.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use toyclub_core::{Catalog, CatalogError};
use toyclub_storefront::{RecordingNotifier, StorefrontConfig, StorefrontSession};

/// A small catalog with one product per interesting shape: a plain item, a
/// bulk item with a minimum order, an item priced above the default ceiling
/// and an uncategorized item.
pub const SMALL_CATALOG: &str = r#"[
    {"id":"bear","name":"Teddy","price":"2.50","image":"/bear.png","category":"plush","ageRange":"0+","stock":500},
    {"id":"bunny","name":"Bunny","price":"3.00","image":"/bunny.png","category":"plush","ageRange":"3+","stock":40},
    {"id":"racer","name":"Racer","price":"4.99","image":"/racer.png","category":"vehicles","ageRange":"3+","minOrder":12},
    {"id":"robot","name":"Robot","price":"129.00","image":"/robot.png","category":"educational","ageRange":"8+","stock":10},
    {"id":"grab-bag","name":"Grab Bag","price":"3.00","image":"/bag.png"}
]"#;

/// A session over `catalog` with default config and a recording notifier.
#[must_use]
pub fn session_over(catalog: Catalog) -> (StorefrontSession, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let session = StorefrontSession::new(
        StorefrontConfig::default(),
        Arc::new(catalog),
        Arc::new(recorder.clone()),
    );
    (session, recorder)
}

/// A session over [`SMALL_CATALOG`].
///
/// # Errors
///
/// Returns an error if the fixture catalog fails validation.
pub fn small_session() -> Result<(StorefrontSession, RecordingNotifier), CatalogError> {
    Ok(session_over(Catalog::from_json(SMALL_CATALOG)?))
}

/// A session over the bundled catalog.
///
/// # Errors
///
/// Returns an error if the bundled catalog fails validation.
pub fn bundled_session() -> Result<(StorefrontSession, RecordingNotifier), CatalogError> {
    Ok(session_over(Catalog::bundled()?))
}
