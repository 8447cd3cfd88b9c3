//! Domain models for the storefront.
//!
//! These are plain records; the containers that own and mutate them live in
//! [`cart`](crate::cart), [`wishlist`](crate::wishlist), and
//! [`session`](crate::session).

pub mod product;
pub mod user;

pub use product::Product;
pub use user::Identity;
