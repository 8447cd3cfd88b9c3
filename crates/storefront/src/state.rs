//! The storefront session context.
//!
//! A [`StorefrontSession`] exclusively owns every piece of session state: the
//! catalog, search query, cart, wishlist, identity, current view, and seller
//! dashboard. The rendering layer calls its operations from event handlers.
//! Every operation runs to completion synchronously; outcomes the user should
//! see are delivered through the [`Notifier`].

use std::fmt;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use artisan_gallery_core::{ListingId, Price, ProductId};

use crate::cart::{CartEntry, CartLedger, QuantityChange};
use crate::catalog::{Catalog, SearchResults};
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::models::{Identity, Product};
use crate::navigation::{NavAction, Navigator, View};
use crate::notify::{Notification, Notifier};
use crate::scheduler::{FeedbackScheduler, Indicator, ScheduledFeedback};
use crate::seller::{
    ListingForm, SellerApplication, SellerDashboard, SellerListing, SellerSettings,
};
use crate::session::SessionGate;
use crate::session::avatar::AvatarUpload;
use crate::session::forms::{
    Credentials, ProfileUpdate, SignInForm, SignUpForm, google_credentials, password_reset_email,
};
use crate::wishlist::{Toggle, Wishlist};

/// Transient visual states the rendering layer polls.
#[derive(Debug, Clone, Default)]
pub struct FeedbackIndicators {
    /// "Added!" on the add-to-cart button, before the dialog closes.
    pub cart_added: Indicator,
    /// Pulsing wishlist heart.
    pub wishlist_pulse: Indicator,
    /// "Saving..." on the profile form.
    pub profile_saving: Indicator,
}

/// All state for one storefront session.
pub struct StorefrontSession {
    config: StorefrontConfig,
    catalog: Catalog,
    query: String,
    cart: CartLedger,
    wishlist: Wishlist,
    gate: SessionGate,
    navigator: Navigator,
    seller: SellerDashboard,
    notifier: Arc<dyn Notifier>,
    scheduler: Option<FeedbackScheduler>,
    indicators: FeedbackIndicators,
    pending: Vec<ScheduledFeedback>,
}

impl fmt::Debug for StorefrontSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontSession")
            .field("query", &self.query)
            .field("cart_items", &self.cart.total_item_count())
            .field("wishlist_items", &self.wishlist.len())
            .field("signed_in", &self.gate.is_signed_in())
            .field("view", self.navigator.current())
            .finish_non_exhaustive()
    }
}

impl StorefrontSession {
    /// Create a session over `catalog`.
    ///
    /// Feedback timers run on the current tokio runtime if there is one;
    /// outside a runtime the indicators stay on until reset.
    #[must_use]
    pub fn new(catalog: Catalog, config: StorefrontConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            catalog,
            query: String::new(),
            cart: CartLedger::new(),
            wishlist: Wishlist::new(),
            gate: SessionGate::new(),
            navigator: Navigator::new(),
            seller: SellerDashboard::seeded(),
            notifier,
            scheduler: FeedbackScheduler::current(),
            indicators: FeedbackIndicators::default(),
            pending: Vec::new(),
        }
    }

    /// Create a session, loading the catalog named in `config` or the
    /// built-in gallery catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Catalog`] if the catalog file cannot be loaded.
    #[instrument(skip_all)]
    pub fn from_config(config: StorefrontConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::gallery(),
        };
        info!(products = catalog.len(), "Session created");
        Ok(Self::new(catalog, config, notifier))
    }

    /// Replace the feedback scheduler.
    #[must_use]
    pub fn with_scheduler(mut self, scheduler: Option<FeedbackScheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Replace the seller dashboard.
    #[must_use]
    pub fn with_seller(mut self, seller: SellerDashboard) -> Self {
        self.seller = seller;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub const fn seller(&self) -> &SellerDashboard {
        &self.seller
    }

    #[must_use]
    pub const fn indicators(&self) -> &FeedbackIndicators {
        &self.indicators
    }

    /// The signed-in identity.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.gate.current()
    }

    /// The view being shown.
    #[must_use]
    pub const fn view(&self) -> &View {
        self.navigator.current()
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Remember `query` and return its results.
    pub fn search(&mut self, query: &str) -> SearchResults<'_> {
        query.clone_into(&mut self.query);
        self.catalog.search(&self.query)
    }

    /// The query behind [`StorefrontSession::results`].
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results for the remembered query.
    #[must_use]
    pub fn results(&self) -> SearchResults<'_> {
        self.catalog.search(&self.query)
    }

    /// Forget the query; results show the full catalog again.
    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of `product` to the cart and return its new quantity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product) -> u32 {
        let quantity = self.cart.add(product);
        add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product.id.as_str())]));
        self.notify(Notification::success(format!("{} added to cart", product.name)));
        let duration = self.config.feedback.cart_added;
        let pending = self.indicators.cart_added.show_for(self.scheduler.as_ref(), duration);
        self.keep(pending);
        quantity
    }

    /// Add a catalog product to the cart by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the catalog has no such product.
    pub fn add_to_cart_by_id(&mut self, id: &ProductId) -> Result<u32> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
            .map_err(|e| report(&*self.notifier, e))?;
        Ok(self.add_to_cart(&product))
    }

    /// Replace the quantity of a cart entry. Zero removes it.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> QuantityChange {
        if quantity == 0 {
            return match self.remove_item(id) {
                Some(_) => QuantityChange::Removed,
                None => QuantityChange::Absent,
            };
        }
        self.cart.set_quantity(id, quantity)
    }

    /// Remove a cart entry.
    ///
    /// The removal notification is emitted whether or not the entry existed.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &ProductId) -> Option<CartEntry> {
        let removed = self.cart.remove(id);
        add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", id.as_str())]));
        self.notify(Notification::success("Item removed from cart"));
        removed
    }

    /// Sum of quantities across the cart.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Sum of line totals across the cart.
    #[must_use]
    pub fn total_amount(&self) -> Price {
        self.cart.total_amount()
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Toggle `product` in the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] without an identity. The wishlist
    /// is left untouched and the session moves to the sign-in view.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn toggle_wishlist(&mut self, product: &Product) -> Result<Toggle> {
        let toggle = match self.wishlist.toggle_for(product, self.gate.current()) {
            Ok(toggle) => toggle,
            Err(e) => {
                warn!("Wishlist toggle without identity");
                self.notify(Notification::error(
                    "Please sign in to add items to your wishlist",
                ));
                self.navigate(NavAction::OpenSignIn);
                return Err(e);
            }
        };

        let message = match toggle {
            Toggle::Added => format!("{} added to wishlist", product.name),
            Toggle::Removed => format!("{} removed from wishlist", product.name),
        };
        add_breadcrumb("wishlist", &message, Some(&[("product_id", product.id.as_str())]));
        self.notify(Notification::success(message));

        let duration = self.config.feedback.wishlist_pulse;
        let pending = self.indicators.wishlist_pulse.show_for(self.scheduler.as_ref(), duration);
        self.keep(pending);
        Ok(toggle)
    }

    /// Remove a product from the wishlist, notifying only if it was there.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> Option<Product> {
        let removed = self.wishlist.remove(id)?;
        self.notify(Notification::success(format!(
            "{} removed from wishlist",
            removed.name
        )));
        Some(removed)
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Sign in from the sign-in form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is incomplete.
    #[instrument(skip_all)]
    pub fn sign_in(&mut self, form: &SignInForm) -> Result<&Identity> {
        let credentials = form
            .validate()
            .map_err(|e| report(&*self.notifier, e.into()))?;
        Ok(self.establish(credentials, "Welcome back!", "Signed in"))
    }

    /// Sign in through the Google button.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the Google account cannot be
    /// turned into credentials.
    #[instrument(skip_all)]
    pub fn sign_in_with_google(&mut self) -> Result<&Identity> {
        let credentials = google_credentials().map_err(|e| report(&*self.notifier, e.into()))?;
        Ok(self.establish(
            credentials,
            "Google sign-in would be implemented here",
            "Signed in with Google",
        ))
    }

    /// Create an account from the sign-up form and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is invalid.
    #[instrument(skip_all, fields(role = %form.role))]
    pub fn sign_up(&mut self, form: &SignUpForm) -> Result<&Identity> {
        let credentials = form
            .validate()
            .map_err(|e| report(&*self.notifier, e.into()))?;
        Ok(self.establish(
            credentials,
            "Account created successfully! Welcome to Artisan Gallery!",
            "Signed up",
        ))
    }

    /// Send a password reset link to the email typed into the sign-in form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is blank.
    #[instrument(skip_all)]
    pub fn request_password_reset(&self, email: &str) -> Result<()> {
        password_reset_email(email).map_err(|e| self.report(e.into()))?;
        info!("Password reset requested");
        self.notify(Notification::success("Password reset link sent to your email"));
        Ok(())
    }

    /// Sign out, clearing the identity, cart, and wishlist.
    #[instrument(skip(self))]
    pub fn sign_out(&mut self) {
        self.gate.sign_out();
        self.cart.clear();
        self.wishlist.clear();
        clear_sentry_user();
        add_breadcrumb("auth", "Signed out", None);
        self.navigate(NavAction::SignedOut);
        self.notify(Notification::success("You have been signed out"));
    }

    /// Encode an uploaded avatar for a [`ProfileUpdate`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the file is not an image or is too
    /// large.
    pub fn encode_avatar(&self, upload: AvatarUpload) -> Result<String> {
        upload
            .into_data_uri(self.config.max_avatar_bytes)
            .map_err(|e| self.report(e.into()))
    }

    /// Replace the editable profile fields of the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] without an identity, or
    /// [`AppError::Validation`] if the update is invalid. Nothing changes on
    /// error.
    #[instrument(skip_all)]
    pub fn update_identity(&mut self, update: &ProfileUpdate) -> Result<&Identity> {
        if !self.gate.is_signed_in() {
            return Err(self.report(AppError::NotAuthenticated));
        }
        let changes = update.validate().map_err(|e| self.report(e.into()))?;

        let duration = self.config.feedback.profile_save;
        let pending = self.indicators.profile_saving.show_for(self.scheduler.as_ref(), duration);
        self.keep(pending);

        let identity = self
            .gate
            .update_identity(changes)
            .map_err(|e| report(&*self.notifier, e))?;
        add_breadcrumb("profile", "Profile updated", None);
        self.notifier
            .notify(Notification::success("Profile updated successfully!"));
        Ok(identity)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Apply a navigation action.
    pub fn navigate(&mut self, action: NavAction) -> &View {
        let signed_in = self.gate.is_signed_in();
        self.navigator.apply(action, signed_in)
    }

    /// Show the detail page for a catalog product.
    ///
    /// An unknown id falls back to the marketplace.
    pub fn view_product_detail(&mut self, id: &ProductId) -> &View {
        if self.catalog.get(id).is_some() {
            self.navigate(NavAction::ViewProductDetail(id.clone()))
        } else {
            warn!(product_id = %id, "Unknown product, showing marketplace");
            self.navigate(NavAction::BackToMarketplace)
        }
    }

    /// The product on the detail page, if that view is showing.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        match self.navigator.current() {
            View::ProductDetail(id) => self.catalog.get(id),
            _ => None,
        }
    }

    // =========================================================================
    // Seller dashboard
    // =========================================================================

    /// Create a draft listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is incomplete.
    #[instrument(skip_all)]
    pub fn add_listing(&mut self, form: &ListingForm) -> Result<&SellerListing> {
        let listing = self
            .seller
            .add_listing(form)
            .map_err(|e| report(&*self.notifier, e))?;
        add_breadcrumb("seller", "Listing created", Some(&[("listing_id", listing.id.as_str())]));
        self.notifier
            .notify(Notification::success("Product listed successfully!"));
        Ok(listing)
    }

    /// Update an existing listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id, or
    /// [`AppError::Validation`] if the form is incomplete.
    #[instrument(skip(self, form))]
    pub fn update_listing(&mut self, id: &ListingId, form: &ListingForm) -> Result<&SellerListing> {
        let listing = self
            .seller
            .update_listing(id, form)
            .map_err(|e| report(&*self.notifier, e))?;
        add_breadcrumb("seller", "Listing updated", Some(&[("listing_id", id.as_str())]));
        self.notifier
            .notify(Notification::success("Product updated successfully!"));
        Ok(listing)
    }

    /// Delete a listing. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn delete_listing(&mut self, id: &ListingId) -> Option<SellerListing> {
        self.seller.delete_listing(id)
    }

    /// Save the seller settings tab.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required name is blank or the
    /// email is malformed.
    #[instrument(skip_all)]
    pub fn save_seller_settings(&mut self, settings: SellerSettings) -> Result<&SellerSettings> {
        let saved = self
            .seller
            .save_settings(settings)
            .map_err(|e| report(&*self.notifier, e))?;
        add_breadcrumb("seller", "Settings saved", None);
        self.notifier
            .notify(Notification::success("Profile updated successfully!"));
        Ok(saved)
    }

    /// Ask for a password change link for the seller account.
    #[instrument(skip(self))]
    pub fn request_seller_password_change(&self) {
        add_breadcrumb("seller", "Password change requested", None);
        self.notify(Notification::success("Password change email sent!"));
    }

    /// Submit an application to sell. On success the form is reset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is blank or the
    /// email is malformed. The form is left as typed.
    #[instrument(skip_all)]
    pub fn submit_seller_application(&self, application: &mut SellerApplication) -> Result<()> {
        let email = application.validate().map_err(|e| self.report(e.into()))?;
        info!(
            domain = email.domain(),
            artist_name = %application.artist_name,
            "Seller application submitted"
        );
        add_breadcrumb("seller", "Application submitted", None);
        *application = SellerApplication::default();
        self.notify(Notification::success(
            "Application submitted successfully! We'll review and contact you within 2-3 business days.",
        ));
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    fn report(&self, err: AppError) -> AppError {
        report(&*self.notifier, err)
    }

    /// Sign in with validated credentials, greeting first and welcoming by
    /// name once the identity exists.
    fn establish(&mut self, credentials: Credentials, greeting: &str, action: &str) -> &Identity {
        self.notify(Notification::success(greeting));
        let identity = self.gate.sign_in(credentials);
        set_sentry_user(&identity.id, Some(identity.email.as_str()));
        add_breadcrumb("auth", action, None);
        self.navigator.apply(NavAction::SignedIn, true);
        self.notifier.notify(Notification::success(format!(
            "Welcome back, {}!",
            identity.first_name
        )));
        identity
    }

    /// Hold a feedback timer until it fires or the session drops.
    fn keep(&mut self, pending: Option<ScheduledFeedback>) {
        self.pending.retain(|p| !p.is_finished());
        self.pending.extend(pending);
    }
}

/// Turn an error into an error notification and hand it back.
fn report(notifier: &dyn Notifier, err: AppError) -> AppError {
    warn!(error = %err, "Session operation rejected");
    add_breadcrumb("error", &err.to_string(), None);
    notifier.notify(Notification::error(err.user_message()));
    err
}
