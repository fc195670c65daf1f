//! ToyClub Storefront library.
//!
//! Session-level state for the wholesale toy storefront: the cart store with
//! user notifications, catalog loading, configuration and the WhatsApp
//! checkout handoff. Rendering is left to the caller.
//!
//! # Architecture
//!
//! - [`state::StorefrontSession`] owns the cart and is passed explicitly to
//!   whatever drives the storefront; there is no global cart.
//! - Pure types and logic (products, filtering, cart values, order
//!   formatting) live in `toyclub-core`.
//! - Notifications go through the [`notify::Notifier`] trait.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;

pub use cart::CartStore;
pub use checkout::{CheckoutError, CheckoutHandoff, WhatsAppLink};
pub use config::{ConfigError, StorefrontConfig};
pub use error::StorefrontError;
pub use notify::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use state::StorefrontSession;
