//! Catalog file validation.
//!
//! Catalog files are authored as YAML lists of products using the same field
//! names as the JSON catalog (`id`, `name`, `price`, `image`, ...).

use std::path::Path;

use tracing::{error, info};

use artisan_gallery_storefront::catalog::Catalog;
use artisan_gallery_storefront::models::Product;

/// Validate a YAML catalog file, logging every problem found.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any product
/// fails validation.
pub async fn validate(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading catalog from file");

    let content = tokio::fs::read_to_string(path).await?;
    let products: Vec<Product> = serde_yaml::from_str(&content)?;

    info!(products = products.len(), "Parsed catalog");

    let errors = Catalog::validate(&products);
    if !errors.is_empty() {
        error!("Catalog validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(format!("{} validation errors found", errors.len()).into());
    }

    info!("Catalog validated successfully");
    Ok(())
}
