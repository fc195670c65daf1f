//! Catalog loading.

use std::path::Path;

use toyclub_core::Catalog;

use crate::error::StorefrontError;

/// Load the catalog from `path`, or the bundled catalog when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub async fn load_catalog(path: Option<&Path>) -> Result<Catalog, StorefrontError> {
    let catalog = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog from file");
            let json = tokio::fs::read_to_string(path).await.map_err(|source| {
                StorefrontError::CatalogRead {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            Catalog::from_json(&json)?
        }
        None => Catalog::bundled()?,
    };

    tracing::info!(products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_bundled() {
        let catalog = load_catalog(None).await.unwrap();
        assert!(!catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let path = std::env::temp_dir().join("toyclub-no-such-catalog.json");
        let result = load_catalog(Some(&path)).await;
        assert!(matches!(result, Err(StorefrontError::CatalogRead { .. })));
    }

    #[tokio::test]
    async fn test_load_file() {
        let path = std::env::temp_dir().join(format!(
            "toyclub-catalog-{}.json",
            std::process::id()
        ));
        tokio::fs::write(
            &path,
            r#"[{"id":"k1","name":"Kite","price":"7.25","image":"/kite.png"}]"#,
        )
        .await
        .unwrap();

        let catalog = load_catalog(Some(&path)).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("k1").unwrap().name, "Kite");

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
