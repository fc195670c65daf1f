//! Product identifier type.
//!
//! Catalog products are keyed by short string slugs (e.g. `"plush-bear-01"`)
//! rather than numeric database IDs, so `ProductId` wraps a `String`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    /// The input string is empty or only whitespace.
    #[error("product id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A catalog product identifier.
///
/// ## Constraints
///
/// - Length: 1-128 characters
/// - Must not be blank
///
/// ## Examples
///
/// ```
/// use toyclub_core::ProductId;
///
/// assert!(ProductId::parse("plush-bear-01").is_ok());
/// assert!(ProductId::parse("").is_err());
/// assert!(ProductId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Maximum length of a product id.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than 128 characters.
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.trim().is_empty() {
            return Err(ProductIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(ProductId::parse("p1").is_ok());
        assert!(ProductId::parse("action-figure-hero").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductId::parse(""), Err(ProductIdError::Empty));
        assert_eq!(ProductId::parse(" \t"), Err(ProductIdError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "x".repeat(ProductId::MAX_LENGTH + 1);
        assert!(matches!(
            ProductId::parse(&long),
            Err(ProductIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_compare_with_str() {
        let id = ProductId::parse("doll-01").unwrap();
        assert_eq!(id, "doll-01");
        assert_eq!(id.as_str(), "doll-01");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<ProductId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let id: ProductId = serde_json::from_str("\"robot-7\"").unwrap();
        assert_eq!(id.to_string(), "robot-7");
    }
}
