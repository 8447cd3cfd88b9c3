//! Artisan Gallery Core - Shared types library.
//!
//! This crate provides common types used across all Artisan Gallery components:
//! - `storefront` - Session state: catalog, cart, wishlist, identity, seller listings
//! - `cli` - Terminal driver for catalog search and scripted sessions
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no timers,
//! no session state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
