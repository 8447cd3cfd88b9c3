//! Catalog product record.

use serde::{Deserialize, Serialize};

use artisan_gallery_core::{Price, ProductId};

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in whole units.
    pub price: Price,
    /// Image URI, resolved by the rendering layer.
    pub image: String,
    /// Free-form category (e.g., "Sculptures").
    pub category: String,
    /// Long-form description.
    pub description: String,
    /// Artist or studio name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Primary material (e.g., "Carrara Marble").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Human-readable dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    /// Whether this is a custom commission rather than a finished piece.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_custom: bool,
}

impl Product {
    /// Create a product with the required fields; optional fields are empty.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: u64,
        image: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Price::new(price),
            image: image.into(),
            category: category.into(),
            description: description.into(),
            artist: None,
            material: None,
            dimensions: None,
            is_custom: false,
        }
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    #[must_use]
    pub const fn custom(mut self) -> Self {
        self.is_custom = true;
        self
    }
}
