//! Product listing form.
//!
//! The form is split into typed sections. Numeric fields arrive as the text
//! the seller typed and are parsed during validation.

use serde::Serialize;
use url::Url;

use artisan_gallery_core::{ItemCondition, Price};

use crate::error::ValidationErrors;

/// Name, description, and physical attributes of the piece.
#[derive(Debug, Clone, Default)]
pub struct ListingDetails {
    pub name: String,
    pub description: String,
    /// Asking price as typed (whole units).
    pub price: String,
    pub category: String,
    pub material: String,
    pub dimensions: String,
    pub weight: String,
    pub condition: ItemCondition,
    pub is_custom: bool,
}

/// Shipping costs as typed.
#[derive(Debug, Clone)]
pub struct ShippingOptions {
    pub domestic: String,
    pub international: String,
    /// Order value above which domestic shipping is free. Blank disables it.
    pub free_shipping_threshold: String,
}

impl Default for ShippingOptions {
    fn default() -> Self {
        Self {
            domestic: "25".to_string(),
            international: "65".to_string(),
            free_shipping_threshold: "1000".to_string(),
        }
    }
}

/// The add/edit listing form.
#[derive(Debug, Clone, Default)]
pub struct ListingForm {
    pub details: ListingDetails,
    pub shipping: ShippingOptions,
    /// Image URIs, first one is the cover.
    pub images: Vec<String>,
    pub tags: Vec<String>,
}

/// Parsed shipping costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shipping {
    pub domestic: Price,
    pub international: Price,
    pub free_shipping_threshold: Option<Price>,
}

/// A [`ListingForm`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidListing {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub material: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<String>,
    pub condition: ItemCondition,
    pub is_custom: bool,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub shipping: Shipping,
}

impl ListingForm {
    /// Pre-fill a form for editing.
    #[must_use]
    pub fn from_listing(listing: &super::SellerListing) -> Self {
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            details: ListingDetails {
                name: listing.name.clone(),
                description: listing.description.clone(),
                price: listing.price.amount().to_string(),
                category: listing.category.clone(),
                material: opt(&listing.material),
                dimensions: opt(&listing.dimensions),
                weight: opt(&listing.weight),
                condition: listing.condition,
                is_custom: listing.is_custom,
            },
            shipping: ShippingOptions {
                domestic: listing.shipping.domestic.amount().to_string(),
                international: listing.shipping.international.amount().to_string(),
                free_shipping_threshold: listing
                    .shipping
                    .free_shipping_threshold
                    .map(|p| p.amount().to_string())
                    .unwrap_or_default(),
            },
            images: listing.images.clone(),
            tags: listing.tags.clone(),
        }
    }

    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns field errors when a required detail is blank, no image is
    /// attached, an image is not a URI, or a price or shipping cost is not a
    /// whole number.
    pub fn validate(&self) -> Result<ValidListing, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let details = &self.details;

        let required = [
            &details.name,
            &details.description,
            &details.price,
            &details.category,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            errors.add("details", "Please fill in all required fields");
        }

        let price = if details.price.trim().is_empty() {
            None
        } else {
            let parsed = parse_amount(&details.price);
            if parsed.is_none_or(|p| p == Price::ZERO) {
                errors.add("price", "Please enter a valid price");
            }
            parsed
        };

        let images: Vec<String> = self
            .images
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();
        if images.is_empty() {
            errors.add("images", "Please upload at least one image");
        } else if images.iter().any(|i| Url::parse(i).is_err()) {
            errors.add("images", "One of the images could not be read");
        }

        let shipping = self.shipping.parse();
        if shipping.is_none() {
            errors.add("shipping", "Please enter valid shipping costs");
        }

        let (price, shipping) = match (price, shipping) {
            (Some(price), Some(shipping)) if errors.is_empty() => (price, shipping),
            _ => return Err(errors),
        };

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.iter().map(|t| t.trim().to_lowercase()) {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(ValidListing {
            name: details.name.trim().to_string(),
            description: details.description.trim().to_string(),
            price,
            category: details.category.trim().to_string(),
            material: non_empty(&details.material),
            dimensions: non_empty(&details.dimensions),
            weight: non_empty(&details.weight),
            condition: details.condition,
            is_custom: details.is_custom,
            images,
            tags,
            shipping,
        })
    }
}

impl ShippingOptions {
    fn parse(&self) -> Option<Shipping> {
        let free_shipping_threshold = if self.free_shipping_threshold.trim().is_empty() {
            None
        } else {
            Some(parse_amount(&self.free_shipping_threshold)?)
        };
        Some(Shipping {
            domestic: parse_amount(&self.domestic)?,
            international: parse_amount(&self.international)?,
            free_shipping_threshold,
        })
    }
}

/// Parse a whole-unit amount, tolerating a leading `$` and digit grouping.
fn parse_amount(input: &str) -> Option<Price> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse::<u64>().ok().map(Price::new)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
