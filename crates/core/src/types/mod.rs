//! Core types for ToyClub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod stock;

pub use id::{ProductId, ProductIdError};
pub use price::{CurrencyCode, Price};
pub use stock::StockLevel;
