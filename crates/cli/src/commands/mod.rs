//! CLI subcommand implementations.

pub mod checkout;
pub mod products;
