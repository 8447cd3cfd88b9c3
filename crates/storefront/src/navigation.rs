//! Named-view state machine.
//!
//! The storefront shows one top-level view at a time. Views change only
//! through explicit [`NavAction`]s; there is no terminal state and the
//! initial view is the marketplace.

use serde::Serialize;
use tracing::debug;

use artisan_gallery_core::ProductId;

/// A top-level storefront view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "view", content = "product_id", rename_all = "kebab-case")]
pub enum View {
    /// Featured collection, search results, cart and wishlist drawers.
    #[default]
    Marketplace,
    /// "Sell with us" landing page.
    SellLanding,
    /// The seller's own listings and stats.
    SellerDashboard,
    /// Sign-in / sign-up forms.
    SignIn,
    /// Profile editor for the active identity.
    Profile,
    /// Full listing page for one product.
    ProductDetail(ProductId),
}

/// A navigation request from the rendering layer or the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// User clicked "Sell".
    OpenSell,
    /// User clicked "Start selling" on the landing page.
    StartSelling,
    /// User clicked "Sign in", or an action required authentication.
    OpenSignIn,
    /// User opened their profile.
    OpenProfile,
    /// User asked for the full listing of a product.
    ViewProductDetail(ProductId),
    /// Any "back" button.
    BackToMarketplace,
    /// Sign-in or sign-up completed.
    SignedIn,
    /// Sign-out completed.
    SignedOut,
}

/// Holds the current view and applies transitions.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The view being shown.
    #[must_use]
    pub const fn current(&self) -> &View {
        &self.current
    }

    /// Apply `action` and return the resulting view.
    ///
    /// The profile view needs an identity; without one the marketplace is
    /// shown instead.
    pub fn apply(&mut self, action: NavAction, signed_in: bool) -> &View {
        let next = match action {
            NavAction::OpenSell => View::SellLanding,
            NavAction::StartSelling => View::SellerDashboard,
            NavAction::OpenSignIn => View::SignIn,
            NavAction::OpenProfile if signed_in => View::Profile,
            NavAction::ViewProductDetail(id) => View::ProductDetail(id),
            NavAction::OpenProfile
            | NavAction::BackToMarketplace
            | NavAction::SignedIn
            | NavAction::SignedOut => View::Marketplace,
        };

        if next != self.current {
            debug!(from = ?self.current, to = ?next, "View changed");
        }
        self.current = next;
        &self.current
    }
}
