//! Scripted storefront session.
//!
//! Drives a session through search, cart, wishlist, and sign-out, logging each
//! notification the way a rendering layer would display it.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::{info, warn};

use artisan_gallery_core::ProductId;
use artisan_gallery_storefront::StorefrontSession;
use artisan_gallery_storefront::config::StorefrontConfig;
use artisan_gallery_storefront::notify::{ChannelNotifier, Level};
use artisan_gallery_storefront::session::forms::SignInForm;

/// Run the demo session.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the catalog has no
/// products to demo with.
pub async fn run(config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (notifier, mut notifications) = ChannelNotifier::channel();
    let renderer = tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            match notification.level {
                Level::Success => info!(target: "gallery_cli::toast", "{}", notification.message),
                Level::Error => warn!(target: "gallery_cli::toast", "{}", notification.message),
            }
        }
    });

    {
        let mut session = StorefrontSession::from_config(config, Arc::new(notifier))?;

        let found = session.search("bronze").len();
        info!(query = "bronze", found, "Searched the collection");
        session.clear_search();

        let product = session
            .catalog()
            .products()
            .first()
            .cloned()
            .ok_or("catalog is empty")?;

        for _ in 0..3 {
            session.add_to_cart(&product);
        }
        info!(
            items = session.total_item_count(),
            total = %session.total_amount(),
            "Cart after three adds"
        );

        session.set_quantity(&product.id, 1);
        info!(total = %session.total_amount(), "Cart after setting quantity to one");

        // Rejected without an identity; the session moves to the sign-in view
        let _ = session.toggle_wishlist(&product);
        info!(view = ?session.view(), "Wishlist requires sign-in");

        session.sign_in(&SignInForm {
            email: "collector@example.com".to_string(),
            password: SecretString::from("gallery-demo"),
        })?;
        session.toggle_wishlist(&product)?;
        let _ = session.add_to_cart_by_id(&ProductId::new("3"));

        info!(
            cart_items = session.total_item_count(),
            wishlist_items = session.wishlist().len(),
            "Before sign-out"
        );
        session.sign_out();
        info!(
            cart_items = session.total_item_count(),
            wishlist_items = session.wishlist().len(),
            signed_in = session.identity().is_some(),
            "After sign-out"
        );
    }

    // The session owned the last sender; the renderer drains and exits
    renderer.await?;
    Ok(())
}
