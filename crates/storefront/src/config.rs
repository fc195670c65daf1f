//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TOYCLUB_STORE_NAME` - Store name used in order messages (default: `ToyClub`)
//! - `TOYCLUB_WHATSAPP_NUMBER` - Number receiving orders, `+` then 7-15 digits
//!   (default: `+919846494210`)
//! - `TOYCLUB_ORDER_PREFIX` - Prefix for order ids (default: `TC`)
//! - `TOYCLUB_CATALOG_PATH` - JSON catalog file; the bundled catalog is used when unset
//! - `TOYCLUB_PRICE_CEILING` - Upper bound of the unfiltered price range;
//!   derived from the catalog when unset

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_STORE_NAME: &str = "ToyClub";
const DEFAULT_WHATSAPP_NUMBER: &str = "+919846494210";
const DEFAULT_ORDER_PREFIX: &str = "TC";

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;
const MAX_ORDER_PREFIX_LENGTH: usize = 8;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Store name shown in the order message header
    pub store_name: String,
    /// WhatsApp number (E.164, with leading `+`) that receives orders
    pub whatsapp_number: String,
    /// Prefix for generated order ids
    pub order_prefix: String,
    /// Catalog file to load instead of the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Explicit upper bound of the unfiltered price range
    pub price_ceiling: Option<Decimal>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
            catalog_path: None,
            price_ceiling: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store_name = get_env_or_default("TOYCLUB_STORE_NAME", DEFAULT_STORE_NAME);
        if store_name.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "TOYCLUB_STORE_NAME".to_string(),
                "must not be blank".to_string(),
            ));
        }

        let whatsapp_number =
            get_env_or_default("TOYCLUB_WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER);
        validate_whatsapp_number(&whatsapp_number, "TOYCLUB_WHATSAPP_NUMBER")?;

        let order_prefix = get_env_or_default("TOYCLUB_ORDER_PREFIX", DEFAULT_ORDER_PREFIX);
        validate_order_prefix(&order_prefix, "TOYCLUB_ORDER_PREFIX")?;

        let catalog_path = get_optional_env("TOYCLUB_CATALOG_PATH").map(PathBuf::from);
        let price_ceiling = get_optional_env("TOYCLUB_PRICE_CEILING")
            .map(|v| parse_price_ceiling(&v, "TOYCLUB_PRICE_CEILING"))
            .transpose()?;

        Ok(Self {
            store_name,
            whatsapp_number,
            order_prefix,
            catalog_path,
            price_ceiling,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Validate a WhatsApp number: `+` followed by 7-15 digits.
fn validate_whatsapp_number(number: &str, var_name: &str) -> Result<(), ConfigError> {
    let digits = number.strip_prefix('+').ok_or_else(|| {
        ConfigError::InvalidEnvVar(var_name.to_string(), "must start with '+'".to_string())
    })?;

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must contain only digits after '+'".to_string(),
        ));
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!(
                "must have {MIN_PHONE_DIGITS}-{MAX_PHONE_DIGITS} digits (got {})",
                digits.len()
            ),
        ));
    }

    Ok(())
}

/// Validate an order id prefix: 1-8 ASCII alphanumerics.
fn validate_order_prefix(prefix: &str, var_name: &str) -> Result<(), ConfigError> {
    if prefix.is_empty()
        || prefix.len() > MAX_ORDER_PREFIX_LENGTH
        || !prefix.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be 1-{MAX_ORDER_PREFIX_LENGTH} ASCII letters or digits"),
        ));
    }
    Ok(())
}

/// Parse a positive decimal price ceiling.
fn parse_price_ceiling(value: &str, var_name: &str) -> Result<Decimal, ConfigError> {
    let ceiling = value
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if ceiling <= Decimal::ZERO {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(ceiling)
}
