//! Static product catalog.
//!
//! The catalog is loaded once per session (from the built-in gallery seed or a
//! JSON file) and never mutated afterwards. Lookups are linear; a gallery
//! catalog holds a handful of pieces.

mod search;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use artisan_gallery_core::ProductId;

use crate::models::Product;

pub use search::{SearchResults, matches_query, search};

/// Base URL shared by the seeded gallery images.
const IMAGE_BASE: &str = "https://images.unsplash.com";

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON for a product list.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share an ID.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product's image reference is not a URI.
    #[error("product {id} has an invalid image URI: {reason}")]
    InvalidImage { id: ProductId, reason: String },
}

/// An immutable, ordered product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, rejecting duplicate IDs and bad image URIs.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` or `CatalogError::InvalidImage`.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        match Self::validate(&products).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(Self { products }),
        }
    }

    /// Check products without building a catalog, returning every problem
    /// found in catalog order.
    #[must_use]
    pub fn validate(products: &[Product]) -> Vec<CatalogError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::with_capacity(products.len());
        for product in products {
            if !seen.insert(&product.id) {
                errors.push(CatalogError::DuplicateId(product.id.clone()));
            }
            if let Err(e) = Url::parse(&product.image) {
                errors.push(CatalogError::InvalidImage {
                    id: product.id.clone(),
                    reason: e.to_string(),
                });
            }
        }
        errors
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, or any error from
    /// [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or any error from
    /// [`Catalog::from_json`].
    #[instrument(fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        debug!(products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The built-in gallery catalog.
    #[must_use]
    pub fn gallery() -> Self {
        Self {
            products: gallery_products(),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Run a substring search over this catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        search(query, &self.products)
    }
}

pub(crate) fn image(photo: &str) -> String {
    format!("{IMAGE_BASE}/photo-{photo}?fit=max&fm=jpg&q=80&w=1080")
}

/// The six pieces of the featured gallery collection.
fn gallery_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Classical Venus Statue",
            2450,
            image("1683918891762-ed43ae8d0da4"),
            "Statues",
            "Hand-carved marble statue inspired by classical Roman art. Perfect centerpiece for gardens or elegant interiors.",
        )
        .with_artist("Marco Venetian")
        .with_material("Carrara Marble")
        .with_dimensions("24\" H x 12\" W x 8\" D"),
        Product::new(
            "2",
            "Bronze Modern Abstract",
            3200,
            image("1699437110121-5b1ec9155868"),
            "Sculptures",
            "Contemporary bronze sculpture with fluid lines representing movement and grace.",
        )
        .with_artist("Elena Rodriguez")
        .with_material("Patinated Bronze")
        .with_dimensions("18\" H x 10\" W x 6\" D"),
        Product::new(
            "3",
            "Ceramic Vase Collection",
            185,
            image("1628685374755-3a293a37aa92"),
            "Decorations",
            "Set of three handmade ceramic vases with unique glazing techniques.",
        )
        .with_artist("Pottery Studio Co.")
        .with_material("Glazed Ceramic")
        .with_dimensions("Various sizes: 8\"-12\" H"),
        Product::new(
            "4",
            "Custom Portrait Commission",
            1500,
            image("1707578087102-92520fda8f97"),
            "Custom Art",
            "Personalized sculpture portrait created from your specifications and photos.",
        )
        .with_artist("Various Artists")
        .with_material("Clay/Bronze Options")
        .with_dimensions("Custom sizing available")
        .custom(),
        Product::new(
            "5",
            "Decorative Pottery Set",
            320,
            image("1758708536088-46c7acab863e"),
            "Decorations",
            "Artisanal pottery pieces with traditional craftsmanship and modern appeal.",
        )
        .with_artist("Terra Collective")
        .with_material("Earthenware")
        .with_dimensions("6\"-10\" H various"),
        Product::new(
            "6",
            "Luxury Home Sculpture",
            4200,
            image("1707376519357-b53e370384fe"),
            "Sculptures",
            "Elegant contemporary sculpture designed for luxury interiors and sophisticated spaces.",
        )
        .with_artist("Atelier Modern")
        .with_material("Mixed Media")
        .with_dimensions("36\" H x 18\" W x 12\" D"),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_catalog_is_valid() {
        let gallery = Catalog::gallery();
        assert_eq!(gallery.len(), 6);
        // Re-validate through the checked constructor
        assert!(Catalog::new(gallery.products().to_vec()).is_ok());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::gallery();
        let product = catalog.get(&ProductId::new("4")).unwrap();
        assert_eq!(product.name, "Custom Portrait Commission");
        assert!(product.is_custom);
        assert!(catalog.get(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "a", "name": "Vase", "price": 80, "image": "https://example.com/a.jpg",
             "category": "Decorations", "description": "A vase"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Product::new("a", "One", 1, "https://example.com/1.jpg", "X", "");
        let b = Product::new("a", "Two", 2, "https://example.com/2.jpg", "X", "");
        let err = Catalog::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn test_invalid_image_rejected() {
        let product = Product::new("a", "One", 1, "not a uri", "X", "");
        let err = Catalog::new(vec![product]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidImage { .. }));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let products = vec![
            Product::new("a", "One", 1, "https://example.com/1.jpg", "X", ""),
            Product::new("a", "Two", 2, "nope", "X", ""),
            Product::new("b", "Three", 3, "also nope", "X", ""),
        ];
        let errors = Catalog::validate(&products);
        assert_eq!(errors.len(), 3);
        assert!(matches!(&errors[0], CatalogError::DuplicateId(id) if id.as_str() == "a"));
        assert!(matches!(&errors[2], CatalogError::InvalidImage { id, .. } if id.as_str() == "b"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("{\"id\": 1}"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
