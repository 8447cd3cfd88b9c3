//! Integration tests for Artisan Gallery.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p artisan-gallery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_cart` - Cart ledger through the session context
//! - `session_wishlist` - Wishlist gating and toggles
//! - `session_identity` - Sign-in, sign-up, profile, sign-out
//! - `seller_dashboard` - Listing lifecycle
//! - `catalog_files` - JSON/YAML catalogs and configuration

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use artisan_gallery_core::{ProductId, Role};
use artisan_gallery_storefront::StorefrontSession;
use artisan_gallery_storefront::catalog::Catalog;
use artisan_gallery_storefront::config::StorefrontConfig;
use artisan_gallery_storefront::models::Product;
use artisan_gallery_storefront::notify::NotificationLog;
use artisan_gallery_storefront::session::forms::{SignInForm, SignUpForm};

/// A session over the built-in catalog plus a handle to its notifications.
pub struct TestContext {
    pub session: StorefrontSession,
    pub log: NotificationLog,
}

impl TestContext {
    /// Session over the built-in gallery catalog with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::gallery())
    }

    /// Session over an arbitrary catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let log = NotificationLog::new();
        let session =
            StorefrontSession::new(catalog, StorefrontConfig::default(), Arc::new(log.clone()));
        Self { session, log }
    }

    /// Clone a product out of the session's catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog has no product with that id.
    #[must_use]
    pub fn product(&self, id: &str) -> Product {
        self.session
            .catalog()
            .get(&ProductId::new(id))
            .cloned()
            .unwrap_or_else(|| panic!("no product {id} in catalog"))
    }

    /// Messages emitted so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.log.messages()
    }

    /// Most recent notification message.
    #[must_use]
    pub fn last_message(&self) -> Option<String> {
        self.log.last().map(|n| n.message)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A sign-in form that passes validation.
#[must_use]
pub fn sign_in_form(email: &str) -> SignInForm {
    SignInForm {
        email: email.to_string(),
        password: SecretString::from("correct horse"),
    }
}

/// A sign-up form that passes validation.
#[must_use]
pub fn sign_up_form(first: &str, last: &str, role: Role) -> SignUpForm {
    SignUpForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: String::new(),
        password: SecretString::from("sculpture-2024"),
        confirm_password: SecretString::from("sculpture-2024"),
        role,
        agree_to_terms: true,
    }
}

/// A product with price `price` and a valid image.
#[must_use]
pub fn product(id: &str, name: &str, price: u64) -> Product {
    Product::new(
        id,
        name,
        price,
        format!("https://images.example.com/{id}.jpg"),
        "Decorations",
        format!("{name}, handmade."),
    )
}

/// A unique path in the system temp directory.
#[must_use]
pub fn temp_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gallery-{}.{extension}", uuid::Uuid::new_v4()))
}
