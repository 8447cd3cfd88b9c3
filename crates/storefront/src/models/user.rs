//! Signed-in identity.
//!
//! There is no account store: an identity is built at sign-in from the form
//! input and lives only as long as the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use artisan_gallery_core::{Email, Role, UserId};

/// The active session identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Given name.
    pub first_name: String,
    /// Family name (may be empty).
    pub last_name: String,
    /// Buyer or seller account.
    pub role: Role,
    /// When this identity signed in or signed up.
    pub joined_at: DateTime<Utc>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Avatar image URI (usually a `data:` URI from an upload).
    pub avatar: Option<String>,
    /// Short profile bio.
    pub bio: Option<String>,
}

impl Identity {
    /// First and last name joined with a space.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// Upper-case initials for avatar placeholders (e.g., "ER").
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Returns `true` for seller accounts.
    #[must_use]
    pub fn is_seller(&self) -> bool {
        self.role == Role::Seller
    }
}
