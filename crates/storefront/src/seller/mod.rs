//! Seller dashboard.
//!
//! A seller's own listings, kept in memory for the session. The dashboard is
//! seeded with the sample studio's pieces; new listings start as drafts.

pub mod application;
pub mod form;
pub mod settings;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use artisan_gallery_core::{ItemCondition, ListingId, ListingStatus, Price};

use crate::catalog::image;
use crate::error::{AppError, Result};
use crate::models::Product;

pub use application::SellerApplication;
pub use form::{ListingDetails, ListingForm, Shipping, ShippingOptions, ValidListing};
pub use settings::SellerSettings;

/// The seller the dashboard belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerProfile {
    pub name: String,
    /// Studio name credited on new listings.
    pub artist_name: String,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            name: "Elena Rodriguez".to_string(),
            artist_name: "Elena Rodriguez Sculpture".to_string(),
        }
    }
}

/// One of the seller's listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerListing {
    pub id: ListingId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    pub artist: String,
    pub material: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<String>,
    pub condition: ItemCondition,
    pub is_custom: bool,
    /// Image URIs; the first is the cover.
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub shipping: Shipping,
    pub status: ListingStatus,
    pub views: u64,
    pub likes: u64,
    pub date_added: NaiveDate,
}

impl SellerListing {
    /// Cover image, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The listing as a marketplace product.
    #[must_use]
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id.clone().into(),
            name: self.name.clone(),
            price: self.price,
            image: self.cover_image().unwrap_or_default().to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
            artist: Some(self.artist.clone()),
            material: self.material.clone(),
            dimensions: self.dimensions.clone(),
            is_custom: self.is_custom,
        }
    }

    fn apply(&mut self, listing: ValidListing) {
        self.name = listing.name;
        self.description = listing.description;
        self.price = listing.price;
        self.category = listing.category;
        self.material = listing.material;
        self.dimensions = listing.dimensions;
        self.weight = listing.weight;
        self.condition = listing.condition;
        self.is_custom = listing.is_custom;
        self.images = listing.images;
        self.tags = listing.tags;
        self.shipping = listing.shipping;
    }
}

/// Aggregate numbers for the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SellerStats {
    pub total_listings: usize,
    pub active_listings: usize,
    pub total_views: u64,
    pub total_likes: u64,
    /// Sum of the prices of active listings.
    pub active_value: Price,
}

/// The seller's listings, profile, and account settings.
#[derive(Debug, Clone)]
pub struct SellerDashboard {
    profile: SellerProfile,
    settings: SellerSettings,
    listings: Vec<SellerListing>,
}

impl Default for SellerDashboard {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SellerDashboard {
    /// A dashboard with no listings.
    #[must_use]
    pub fn empty(profile: SellerProfile) -> Self {
        let mut settings = SellerSettings::default();
        settings.personal_info.full_name.clone_from(&profile.name);
        settings.personal_info.artist_name.clone_from(&profile.artist_name);
        Self {
            profile,
            settings,
            listings: Vec::new(),
        }
    }

    /// The sample studio with its three listings.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            profile: SellerProfile::default(),
            settings: SellerSettings::default(),
            listings: seed_listings(),
        }
    }

    #[must_use]
    pub const fn profile(&self) -> &SellerProfile {
        &self.profile
    }

    /// Listings in insertion order.
    #[must_use]
    pub fn listings(&self) -> &[SellerListing] {
        &self.listings
    }

    #[must_use]
    pub const fn settings(&self) -> &SellerSettings {
        &self.settings
    }

    /// Replace every settings section at once.
    ///
    /// The profile's names follow the personal info section, so listings
    /// created afterwards are credited to the new artist name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required name is blank or the
    /// email is malformed. Nothing changes on error.
    pub fn save_settings(&mut self, settings: SellerSettings) -> Result<&SellerSettings> {
        settings.validate()?;

        let info = &settings.personal_info;
        self.profile.name = info.full_name.trim().to_string();
        self.profile.artist_name = info.artist_name.trim().to_string();
        self.settings = settings;
        info!(artist_name = %self.profile.artist_name, "Seller settings saved");
        Ok(&self.settings)
    }

    #[must_use]
    pub fn get(&self, id: &ListingId) -> Option<&SellerListing> {
        self.listings.iter().find(|l| &l.id == id)
    }

    /// Create a draft listing from the form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is incomplete.
    pub fn add_listing(&mut self, form: &ListingForm) -> Result<&SellerListing> {
        let valid = form.validate()?;

        let mut listing = SellerListing {
            id: ListingId::generate(),
            name: String::new(),
            description: String::new(),
            price: Price::ZERO,
            category: String::new(),
            artist: self.profile.artist_name.clone(),
            material: None,
            dimensions: None,
            weight: None,
            condition: ItemCondition::default(),
            is_custom: false,
            images: Vec::new(),
            tags: Vec::new(),
            shipping: valid.shipping,
            status: ListingStatus::Draft,
            views: 0,
            likes: 0,
            date_added: Utc::now().date_naive(),
        };
        listing.apply(valid);
        info!(listing_id = %listing.id, name = %listing.name, "Listing created");

        let id = listing.id.clone();
        self.listings.push(listing);
        self.listings
            .last()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Replace a listing's editable fields. Status, counters, and date are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id (checked first), or
    /// [`AppError::Validation`] if the form is incomplete.
    pub fn update_listing(&mut self, id: &ListingId, form: &ListingForm) -> Result<&SellerListing> {
        let listing = self
            .listings
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        listing.apply(form.validate()?);
        info!(listing_id = %id, "Listing updated");
        Ok(listing)
    }

    /// Remove a listing. Unknown ids are ignored.
    pub fn delete_listing(&mut self, id: &ListingId) -> Option<SellerListing> {
        let index = self.listings.iter().position(|l| &l.id == id)?;
        debug!(listing_id = %id, "Listing deleted");
        Some(self.listings.remove(index))
    }

    /// Overview numbers across all listings.
    #[must_use]
    pub fn stats(&self) -> SellerStats {
        let active = || {
            self.listings
                .iter()
                .filter(|l| l.status == ListingStatus::Active)
        };
        SellerStats {
            total_listings: self.listings.len(),
            active_listings: active().count(),
            total_views: self.listings.iter().map(|l| l.views).sum(),
            total_likes: self.listings.iter().map(|l| l.likes).sum(),
            active_value: active().map(|l| l.price).sum(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    price: u64,
    photo: &str,
    description: &str,
    material: &str,
    dimensions: &str,
    status: ListingStatus,
    (views, likes): (u64, u64),
    (year, month, day): (i32, u32, u32),
) -> SellerListing {
    SellerListing {
        id: ListingId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::new(price),
        category: "Sculptures".to_string(),
        artist: "Elena Rodriguez".to_string(),
        material: Some(material.to_string()),
        dimensions: Some(dimensions.to_string()),
        weight: None,
        condition: ItemCondition::New,
        is_custom: false,
        images: vec![image(photo)],
        tags: Vec::new(),
        shipping: Shipping {
            domestic: Price::new(25),
            international: Price::new(65),
            free_shipping_threshold: Some(Price::new(1000)),
        },
        status,
        views,
        likes,
        date_added: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

fn seed_listings() -> Vec<SellerListing> {
    vec![
        seed(
            "sp1",
            "Bronze Modern Abstract",
            3200,
            "1699437110121-5b1ec9155868",
            "Contemporary bronze sculpture with fluid lines representing movement and grace.",
            "Patinated Bronze",
            "18\" H x 10\" W x 6\" D",
            ListingStatus::Active,
            (342, 28),
            (2024, 1, 15),
        ),
        seed(
            "sp2",
            "Flowing Forms Series I",
            2800,
            "1707578087102-92520fda8f97",
            "Part of my signature flowing forms series, this piece explores organic movement.",
            "Bronze",
            "22\" H x 14\" W x 9\" D",
            ListingStatus::Active,
            (189, 15),
            (2024, 2, 3),
        ),
        seed(
            "sp3",
            "Abstract Harmony",
            3500,
            "1707376519357-b53e370384fe",
            "A contemporary piece that balances form and negative space.",
            "Mixed Media",
            "28\" H x 16\" W x 10\" D",
            ListingStatus::Draft,
            (0, 0),
            (2024, 2, 20),
        ),
    ]
}
