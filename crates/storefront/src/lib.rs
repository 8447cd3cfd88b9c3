//! Artisan Gallery Storefront library.
//!
//! The state core behind the storefront screens. A rendering layer owns a
//! [`StorefrontSession`](state::StorefrontSession), calls its operations from
//! event handlers, and displays the [`Notification`](notify::Notification)s it
//! emits.
//!
//! # Modules
//!
//! - [`catalog`] - Static product catalog and substring search
//! - [`cart`] - Cart ledger (quantity bookkeeping)
//! - [`wishlist`] - Wishlist set (membership toggle)
//! - [`session`] - Identity, sign-in/sign-up/Google forms, profile updates
//! - [`seller`] - Seller dashboard listings, settings, and applications
//! - [`navigation`] - Named-view state machine
//! - [`scheduler`] - Cancellable visual-feedback timers
//! - [`notify`] - Notifications delivered to the rendering layer
//! - [`state`] - The owned session context composing all of the above

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod scheduler;
pub mod seller;
pub mod session;
pub mod state;
pub mod wishlist;

pub use state::StorefrontSession;
