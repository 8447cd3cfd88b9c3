//! Catalog search from the command line.

use tracing::info;

use artisan_gallery_storefront::catalog::{Catalog, SearchResults};
use artisan_gallery_storefront::config::StorefrontConfig;

/// Log every product matching `query`.
///
/// # Errors
///
/// Returns an error if the configured catalog file cannot be loaded.
pub fn run(config: &StorefrontConfig, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::gallery(),
    };

    let results = catalog.search(query);
    match &results {
        SearchResults::All(_) => info!(count = results.len(), "Showing the full collection"),
        SearchResults::Matches(_) => {
            info!(count = results.len(), query = %query.trim(), "Found pieces");
        }
    }

    for product in results.iter() {
        info!(
            id = %product.id,
            price = %product.price,
            category = %product.category,
            artist = product.artist.as_deref().unwrap_or("-"),
            "{}",
            product.name
        );
    }
    Ok(())
}
