//! Wishlist set.
//!
//! At most one entry per product ID, kept in insertion order for display.
//! Authentication is checked by the caller: [`Wishlist::toggle_for`] takes the
//! active identity and refuses to mutate without one.

use serde::Serialize;

use artisan_gallery_core::ProductId;

use crate::error::AppError;
use crate::models::{Identity, Product};

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The product was appended.
    Added,
    /// The product was already present and has been removed.
    Removed,
}

/// A de-duplicated, ordered collection of products.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Toggle `product` on behalf of `identity`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotAuthenticated` when `identity` is `None`; the set
    /// is left untouched.
    pub fn toggle_for(
        &mut self,
        product: &Product,
        identity: Option<&Identity>,
    ) -> Result<Toggle, AppError> {
        if identity.is_none() {
            return Err(AppError::NotAuthenticated);
        }
        Ok(self.toggle(product))
    }

    /// Add `product` if absent, remove it if present.
    pub fn toggle(&mut self, product: &Product) -> Toggle {
        if self.remove(&product.id).is_some() {
            Toggle::Removed
        } else {
            self.items.push(product.clone());
            Toggle::Added
        }
    }

    /// Remove the product with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.items.iter().position(|p| &p.id == id)?;
        Some(self.items.remove(index))
    }

    /// Returns `true` if a product with `id` is in the wishlist.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }

    /// Products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every product.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use artisan_gallery_core::{Email, Role, UserId};

    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Piece {id}"), 10, "https://example.com/p.jpg", "Art", "")
    }

    fn identity() -> Identity {
        Identity {
            id: UserId::new("u1"),
            email: Email::parse("buyer@example.com").unwrap(),
            first_name: "Ada".to_string(),
            last_name: "Buyer".to_string(),
            role: Role::Buyer,
            joined_at: Utc::now(),
            phone: None,
            avatar: None,
            bio: None,
        }
    }

    #[test]
    fn test_toggle_twice_returns_to_absence() {
        let mut wishlist = Wishlist::new();
        let user = identity();
        let p = product("1");

        assert_eq!(wishlist.toggle_for(&p, Some(&user)).unwrap(), Toggle::Added);
        assert!(wishlist.contains(&p.id));
        assert_eq!(wishlist.toggle_for(&p, Some(&user)).unwrap(), Toggle::Removed);
        assert!(!wishlist.contains(&p.id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_toggle_without_identity_leaves_set_unchanged() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&product("1"));

        let result = wishlist.toggle_for(&product("2"), None);
        assert!(matches!(result, Err(AppError::NotAuthenticated)));
        let result = wishlist.toggle_for(&product("1"), None);
        assert!(matches!(result, Err(AppError::NotAuthenticated)));

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(&ProductId::new("1")));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new();
        for id in ["3", "1", "2"] {
            wishlist.toggle(&product(id));
        }
        wishlist.toggle(&product("1"));
        wishlist.toggle(&product("1"));

        let order: Vec<&str> = wishlist.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_remove_returns_product_only_if_present() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&product("1"));

        assert_eq!(wishlist.remove(&ProductId::new("1")).unwrap().name, "Piece 1");
        assert!(wishlist.remove(&ProductId::new("1")).is_none());
    }
}
