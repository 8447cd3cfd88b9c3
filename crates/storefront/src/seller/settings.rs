//! Seller account settings.
//!
//! The settings tab edits four independent sections. Each section is its own
//! struct so a save replaces whole sections rather than patching fields by
//! name.

use serde::{Deserialize, Serialize};

use artisan_gallery_core::Email;

use crate::error::ValidationErrors;

/// Public-facing details about the seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub artist_name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    pub instagram: String,
}

/// How the seller wants to be paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    BankTransfer,
    Paypal,
    Stripe,
    Check,
}

/// Details used for payouts and tax reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub business_name: String,
    pub tax_id: String,
    pub business_address: String,
    pub preferred_payment: PaymentMethod,
}

/// Which messages the seller receives.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_new_orders: bool,
    pub email_marketing: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_new_orders: true,
            email_marketing: false,
            push_notifications: true,
            weekly_reports: true,
        }
    }
}

/// Who can see the seller's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileVisibility {
    #[default]
    Public,
    BuyersOnly,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub show_email: bool,
    pub show_phone: bool,
    pub profile_visibility: ProfileVisibility,
}

/// Every section of the settings tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerSettings {
    pub personal_info: PersonalInfo,
    pub business: BusinessInfo,
    pub notifications: NotificationPreferences,
    pub privacy: PrivacySettings,
}

impl Default for SellerSettings {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "Elena Rodriguez".to_string(),
                email: "elena@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                artist_name: "Elena Rodriguez Sculpture".to_string(),
                bio: "Passionate sculptor with over 15 years of experience creating \
                      contemporary bronze works. My pieces explore themes of movement, \
                      emotion, and the human condition through abstract forms."
                    .to_string(),
                location: "San Francisco, CA".to_string(),
                website: "https://elenarodriguez.art".to_string(),
                instagram: "@elena_rodriguez_art".to_string(),
            },
            business: BusinessInfo {
                business_name: "Elena Rodriguez Studio LLC".to_string(),
                tax_id: "12-3456789".to_string(),
                business_address: "123 Art District St, San Francisco, CA 94103".to_string(),
                preferred_payment: PaymentMethod::BankTransfer,
            },
            notifications: NotificationPreferences::default(),
            privacy: PrivacySettings::default(),
        }
    }
}

impl SellerSettings {
    /// Check the fields the rest of the dashboard depends on.
    ///
    /// # Errors
    ///
    /// Returns field errors for a blank full name or artist name, or an email
    /// without the `local@domain.tld` shape.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let info = &self.personal_info;

        if info.full_name.trim().is_empty() || info.artist_name.trim().is_empty() {
            errors.add("personal_info", "Please fill in all required fields");
        }
        if Email::parse(&info.email).is_err() {
            errors.add("email", "Please enter a valid email address");
        }

        errors.into_result()
    }
}
