//! "Apply to sell" form on the sell landing page.

use serde::{Deserialize, Serialize};

use artisan_gallery_core::Email;

use crate::error::ValidationErrors;

/// An artist's application to join the marketplace.
///
/// Specialty and experience are free-form picks from the landing page's
/// dropdowns ("sculptures", "3-5", ...) and are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub artist_name: String,
    pub specialty: String,
    pub experience: String,
    pub portfolio: String,
    pub description: String,
}

impl SellerApplication {
    /// Validate the application.
    ///
    /// # Errors
    ///
    /// Returns field errors when name, email, phone, artist name, or
    /// description is blank, or when the email is malformed.
    pub fn validate(&self) -> Result<Email, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let required = [
            &self.name,
            &self.email,
            &self.phone,
            &self.artist_name,
            &self.description,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            errors.add("application", "Please fill in all required fields");
        }

        let email = if self.email.trim().is_empty() {
            None
        } else {
            let parsed = Email::parse(&self.email).ok();
            if parsed.is_none() {
                errors.add("email", "Please enter a valid email address");
            }
            parsed
        };

        match email {
            Some(email) if errors.is_empty() => Ok(email),
            _ => Err(errors),
        }
    }
}
