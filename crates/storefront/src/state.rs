//! Session state shared by everything that drives the storefront.
//!
//! A [`StorefrontSession`] is created once per session and passed explicitly
//! to whatever needs it. It owns the cart store; the catalog and config are
//! read-only and cheaply shared via `Arc`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use toyclub_core::catalog::RELATED_PRODUCTS_LIMIT;
use toyclub_core::{Catalog, FilterCriteria, OrderId, OrderSummary, Product, apply_filters};
use tracing::instrument;

use crate::cart::CartStore;
use crate::catalog::load_catalog;
use crate::checkout::{CheckoutError, CheckoutHandoff, WhatsAppLink};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::notify::{Notification, Notifier};

/// One shopper's session: catalog, cart and checkout settings.
#[derive(Debug)]
pub struct StorefrontSession {
    config: Arc<StorefrontConfig>,
    catalog: Arc<Catalog>,
    cart: CartStore,
    whatsapp: WhatsAppLink,
    notifier: Arc<dyn Notifier>,
}

impl StorefrontSession {
    /// Create a session over an already loaded catalog.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: Arc<Catalog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let whatsapp = WhatsAppLink::new(config.whatsapp_number.clone());
        Self {
            config: Arc::new(config),
            catalog,
            cart: CartStore::new(Arc::clone(&notifier)),
            whatsapp,
            notifier,
        }
    }

    /// Load the configured catalog and create a session over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub async fn from_config(
        config: StorefrontConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let catalog = load_catalog(config.catalog_path.as_deref()).await?;
        Ok(Self::new(config, Arc::new(catalog), notifier))
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Unfiltered criteria for this catalog.
    ///
    /// The price ceiling comes from config when set, otherwise from the
    /// catalog's most expensive product.
    #[must_use]
    pub fn default_criteria(&self) -> FilterCriteria {
        self.config.price_ceiling.map_or_else(
            || FilterCriteria::for_catalog(&self.catalog),
            FilterCriteria::with_ceiling,
        )
    }

    /// Criteria seeded from a navigation query such as `category=dolls`.
    #[must_use]
    pub fn criteria_from_query(&self, query: &str) -> FilterCriteria {
        self.default_criteria().from_query(query)
    }

    /// Products matching `criteria`, in catalog order.
    #[instrument(skip(self))]
    pub fn browse(&self, criteria: &FilterCriteria) -> Vec<Arc<Product>> {
        let products = apply_filters(&self.catalog, criteria);
        tracing::debug!(matched = products.len(), "Applied product filters");
        products
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is not in the catalog.
    pub fn product(&self, id: &str) -> Result<&Arc<Product>> {
        self.catalog
            .get(id)
            .ok_or_else(|| StorefrontError::NotFound(format!("product {id}")))
    }

    /// Other products in the same category, for the detail page.
    #[must_use]
    pub fn related_products(&self, id: &str) -> Vec<Arc<Product>> {
        self.catalog.related(id, RELATED_PRODUCTS_LIMIT)
    }

    /// Add a catalog product to the cart.
    ///
    /// `quantity` defaults to the product's minimum order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: &str, quantity: Option<u32>) -> Result<()> {
        let product = Arc::clone(self.product(product_id)?);
        let quantity = quantity.unwrap_or_else(|| product.min_order());
        self.cart.add_item(product, quantity);
        Ok(())
    }

    /// Hand the cart off to WhatsApp and clear it.
    ///
    /// `at` is the order time; the order id is derived from it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart` when there is nothing to order. The cart is left
    /// untouched on error.
    #[instrument(skip(self))]
    pub fn checkout(&mut self, at: DateTime<Utc>) -> Result<CheckoutHandoff> {
        match self.build_handoff(at) {
            Ok(handoff) => {
                tracing::info!(
                    order_id = %handoff.summary.order_id,
                    lines = handoff.summary.lines.len(),
                    total = %handoff.summary.total,
                    "Checkout handed off to WhatsApp"
                );
                self.cart.clear_cart();
                Ok(handoff)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Checkout failed");
                self.notifier.notify(Notification::error(
                    "There was an error processing your order. Please try again.",
                ));
                Err(e.into())
            }
        }
    }

    /// [`Self::checkout`] at the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::checkout`].
    pub fn checkout_now(&mut self) -> Result<CheckoutHandoff> {
        self.checkout(Utc::now())
    }

    fn build_handoff(
        &self,
        at: DateTime<Utc>,
    ) -> std::result::Result<CheckoutHandoff, CheckoutError> {
        let cart = self.cart.snapshot();
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order_id = OrderId::from_timestamp(&self.config.order_prefix, at);
        let summary = OrderSummary::from_cart(&self.config.store_name, order_id, &cart);
        let message = summary.message();
        let url = self.whatsapp.url(&message)?;

        Ok(CheckoutHandoff {
            summary,
            message,
            url,
        })
    }
}
