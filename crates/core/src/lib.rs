//! ToyClub Core - Shared types library.
//!
//! This crate provides the domain types and pure logic used across all ToyClub
//! components:
//! - `storefront` - Session state, cart store with notifications, checkout handoff
//! - `cli` - Command-line driver for browsing the catalog and checking out
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no file I/O,
//! no logging, no clocks read implicitly. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and stock levels
//! - [`product`] - Catalog product records
//! - [`catalog`] - The static, validated product catalog
//! - [`cart`] - Copy-on-write cart line collection
//! - [`filter`] - Product filter criteria and pipeline
//! - [`checkout`] - Order summary formatting for the checkout handoff

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod filter;
pub mod product;
pub mod types;

pub use cart::{AddOutcome, Cart, CartLineItem};
pub use catalog::{Catalog, CatalogError};
pub use checkout::{OrderId, OrderLine, OrderSummary};
pub use filter::{FilterCriteria, PriceRange, apply_filters};
pub use product::Product;
pub use types::*;
