//! Catalog document loading.
//!
//! The catalog is a static JSON array of units, read once at startup.
//! There is no reload path; redeploying the document means restarting
//! the service.

use anyhow::Context;
use wordgym_core::Catalog;

/// Read and parse the catalog document from disk.
pub async fn load_from_path(path: &str) -> anyhow::Result<Catalog> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read catalog document at {}", path))?;

    let catalog = Catalog::from_json(&body)
        .with_context(|| format!("failed to parse catalog document at {}", path))?;

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let result = load_from_path("/nonexistent/catalog.json").await;
        assert!(result.is_err());
    }
}
