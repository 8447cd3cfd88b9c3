//! Session identity gate.
//!
//! Holds at most one signed-in [`Identity`]. There is no account store:
//! signing in builds an identity from validated form input, and signing out
//! discards it.

pub mod avatar;
pub mod forms;

use chrono::Utc;
use tracing::{debug, info};

use artisan_gallery_core::UserId;

use crate::error::{AppError, Result};
use crate::models::Identity;

use forms::{Credentials, ProfileChanges};

/// The active identity, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    identity: Option<Identity>,
}

impl SessionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in identity.
    #[must_use]
    pub const fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Establish a new identity from validated credentials.
    ///
    /// The display name's first word becomes the first name ("User" if the
    /// name is blank) and the remaining words the last name. Any previous
    /// identity is replaced.
    pub fn sign_in(&mut self, credentials: Credentials) -> &Identity {
        let mut words = credentials.display_name.split_whitespace();
        let first_name = words.next().unwrap_or("User").to_string();
        let last_name = words.collect::<Vec<_>>().join(" ");

        let identity = Identity {
            id: UserId::generate(),
            email: credentials.email,
            first_name,
            last_name,
            role: credentials.role,
            joined_at: Utc::now(),
            phone: credentials.phone,
            avatar: None,
            bio: None,
        };
        info!(user_id = %identity.id, role = %identity.role, "Identity established");

        self.identity.insert(identity)
    }

    /// Discard the identity, returning it if there was one.
    pub fn sign_out(&mut self) -> Option<Identity> {
        let previous = self.identity.take();
        if let Some(identity) = &previous {
            debug!(user_id = %identity.id, "Identity cleared");
        }
        previous
    }

    /// Apply validated profile changes to the active identity.
    ///
    /// The identity's id, role, and join time are preserved. Either every
    /// field is replaced or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] if no identity is active.
    pub fn update_identity(&mut self, changes: ProfileChanges) -> Result<&Identity> {
        let identity = self.identity.as_mut().ok_or(AppError::NotAuthenticated)?;

        *identity = Identity {
            first_name: changes.first_name,
            last_name: changes.last_name,
            email: changes.email,
            phone: changes.phone,
            bio: changes.bio,
            avatar: changes.avatar,
            ..identity.clone()
        };
        debug!(user_id = %identity.id, "Identity updated");

        Ok(identity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use artisan_gallery_core::{Email, Role};

    use super::*;

    fn credentials(name: &str) -> Credentials {
        Credentials {
            email: Email::parse("elena@example.com").unwrap(),
            display_name: name.to_string(),
            role: Role::Seller,
            phone: Some("555-0100".to_string()),
        }
    }

    fn changes() -> ProfileChanges {
        ProfileChanges {
            first_name: "Lena".to_string(),
            last_name: "Rodriguez-Vega".to_string(),
            email: Email::parse("lena@example.com").unwrap(),
            phone: None,
            bio: Some("Bronze and stone".to_string()),
            avatar: Some("data:image/png;base64,AA==".to_string()),
        }
    }

    #[test]
    fn test_sign_in_splits_display_name() {
        let mut gate = SessionGate::new();
        let identity = gate.sign_in(credentials("Elena Maria Rodriguez"));
        assert_eq!(identity.first_name, "Elena");
        assert_eq!(identity.last_name, "Maria Rodriguez");
        assert_eq!(identity.role, Role::Seller);
        assert!(gate.is_signed_in());
    }

    #[test]
    fn test_sign_in_blank_name_defaults_to_user() {
        let mut gate = SessionGate::new();
        let identity = gate.sign_in(credentials("   "));
        assert_eq!(identity.first_name, "User");
        assert_eq!(identity.last_name, "");
    }

    #[test]
    fn test_sign_in_generates_fresh_ids() {
        let mut gate = SessionGate::new();
        let first = gate.sign_in(credentials("User")).id.clone();
        let second = gate.sign_in(credentials("User")).id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sign_out() {
        let mut gate = SessionGate::new();
        assert!(gate.sign_out().is_none());
        gate.sign_in(credentials("User"));
        assert!(gate.sign_out().is_some());
        assert!(gate.current().is_none());
    }

    #[test]
    fn test_update_identity_preserves_id_role_and_join_time() {
        let mut gate = SessionGate::new();
        let before = gate.sign_in(credentials("Elena Rodriguez")).clone();

        let after = gate.update_identity(changes()).unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.role, before.role);
        assert_eq!(after.joined_at, before.joined_at);
        assert_eq!(after.first_name, "Lena");
        assert_eq!(after.email.as_str(), "lena@example.com");
        assert!(after.phone.is_none());
        assert_eq!(after.bio.as_deref(), Some("Bronze and stone"));
    }

    #[test]
    fn test_update_identity_requires_identity() {
        let mut gate = SessionGate::new();
        assert!(matches!(
            gate.update_identity(changes()),
            Err(AppError::NotAuthenticated)
        ));
    }
}
