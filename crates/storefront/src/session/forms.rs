//! Sign-in, sign-up, and profile form input.
//!
//! Each form is a typed struct that validates into the value the session
//! needs. Validation collects every failing field in the order the form
//! checks them; nothing is applied unless the whole form passes.

use secrecy::{ExposeSecret, SecretString};

use artisan_gallery_core::{Email, EmailError, Role};

use crate::error::ValidationErrors;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum profile bio length, in characters.
pub const MAX_BIO_LENGTH: usize = 500;

/// Everything needed to establish an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: Email,
    /// Full display name; split into first/last at sign-in.
    pub display_name: String,
    pub role: Role,
    pub phone: Option<String>,
}

/// The "Sign in" tab.
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: String,
    pub password: SecretString,
}

impl SignInForm {
    /// Validate the form.
    ///
    /// There is no account store, so a valid sign-in always produces a buyer
    /// named "User".
    ///
    /// # Errors
    ///
    /// Returns field errors for a missing email, missing password, or an
    /// email without the `local@domain.tld` shape.
    pub fn validate(&self) -> Result<Credentials, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email_blank = self.email.trim().is_empty();
        if email_blank {
            errors.add("email", "Please enter your email address");
        }
        if self.password.expose_secret().is_empty() {
            errors.add("password", "Please enter your password");
        }
        let email = if email_blank {
            None
        } else {
            parse_email(&self.email, &mut errors)
        };

        let email = match email {
            Some(email) if errors.is_empty() => email,
            _ => return Err(errors),
        };
        Ok(Credentials {
            email,
            display_name: "User".to_string(),
            role: Role::Buyer,
            phone: None,
        })
    }
}

/// The "Create account" tab.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub role: Role,
    pub agree_to_terms: bool,
}

impl SignUpForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns field errors for missing names, a missing or malformed email,
    /// a missing or short password, a mismatched confirmation, or unaccepted
    /// terms.
    pub fn validate(&self) -> Result<Credentials, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if first.is_empty() || last.is_empty() {
            errors.add("name", "Please enter your full name");
        }

        let email = if self.email.trim().is_empty() {
            errors.add("email", "Please enter your email address");
            None
        } else {
            parse_email(&self.email, &mut errors)
        };

        let password = self.password.expose_secret();
        if password.is_empty() {
            errors.add("password", "Please enter a password");
        } else if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
            );
        }
        if password != self.confirm_password.expose_secret() {
            errors.add("confirm_password", "Passwords do not match");
        }

        if !self.agree_to_terms {
            errors.add("agree_to_terms", "Please agree to the Terms & Conditions");
        }

        let email = match email {
            Some(email) if errors.is_empty() => email,
            _ => return Err(errors),
        };
        Ok(Credentials {
            email,
            display_name: format!("{first} {last}"),
            role: self.role,
            phone: non_empty(&self.phone),
        })
    }
}

/// Profile editor input. Replaces the mutable subset of the identity.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    /// Avatar URI; empty clears it.
    pub avatar: String,
}

/// A validated [`ProfileUpdate`] with empty optionals normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    /// Validate the update.
    ///
    /// # Errors
    ///
    /// Returns field errors for blank names, a missing or malformed email, or
    /// a bio longer than [`MAX_BIO_LENGTH`] characters.
    pub fn validate(&self) -> Result<ProfileChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if first.is_empty() || last.is_empty() {
            errors.add("name", "First name and last name are required");
        }

        let email = if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
            None
        } else {
            parse_email(&self.email, &mut errors)
        };

        let bio = self.bio.trim();
        if bio.chars().count() > MAX_BIO_LENGTH {
            errors.add(
                "bio",
                format!("Bio must be at most {MAX_BIO_LENGTH} characters"),
            );
        }

        let email = match email {
            Some(email) if errors.is_empty() => email,
            _ => return Err(errors),
        };
        Ok(ProfileChanges {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email,
            phone: non_empty(&self.phone),
            bio: non_empty(bio),
            avatar: non_empty(&self.avatar),
        })
    }
}

/// Check the email typed into the sign-in form before sending a reset link.
///
/// Only presence is checked; the address is returned trimmed.
///
/// # Errors
///
/// Returns a field error if the email is blank.
pub fn password_reset_email(input: &str) -> Result<&str, ValidationErrors> {
    let email = input.trim();
    if email.is_empty() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Please enter your email address first");
        return Err(errors);
    }
    Ok(email)
}

/// Credentials for the "Continue with Google" button.
///
/// There is no identity provider, so every Google sign-in is the same buyer.
///
/// # Errors
///
/// Never fails in practice; the fixed address is well formed.
pub fn google_credentials() -> Result<Credentials, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let email = parse_email("user@gmail.com", &mut errors).ok_or(errors)?;
    Ok(Credentials {
        email,
        display_name: "Google User".to_string(),
        role: Role::Buyer,
        phone: None,
    })
}

/// Parse an email, recording a shape failure in `errors`.
fn parse_email(input: &str, errors: &mut ValidationErrors) -> Option<Email> {
    match Email::parse(input) {
        Ok(email) => Some(email),
        Err(EmailError::Empty) => {
            errors.add("email", "Please enter your email address");
            None
        }
        Err(_) => {
            errors.add("email", "Please enter a valid email address");
            None
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sign_up() -> SignUpForm {
        SignUpForm {
            first_name: "Elena".to_string(),
            last_name: "Rodriguez".to_string(),
            email: "elena@example.com".to_string(),
            phone: String::new(),
            password: SecretString::from("bronze-forms"),
            confirm_password: SecretString::from("bronze-forms"),
            role: Role::Seller,
            agree_to_terms: true,
        }
    }

    fn profile() -> ProfileUpdate {
        ProfileUpdate {
            first_name: " Elena ".to_string(),
            last_name: "Rodriguez".to_string(),
            email: "elena@example.com".to_string(),
            phone: "  ".to_string(),
            bio: "Sculptor".to_string(),
            avatar: String::new(),
        }
    }

    #[test]
    fn test_sign_in_valid() {
        let form = SignInForm {
            email: "ada@example.com".to_string(),
            password: SecretString::from("anything"),
        };
        let credentials = form.validate().unwrap();
        assert_eq!(credentials.email.as_str(), "ada@example.com");
        assert_eq!(credentials.display_name, "User");
        assert_eq!(credentials.role, Role::Buyer);
    }

    #[test]
    fn test_sign_in_reports_missing_fields_in_order() {
        let form = SignInForm {
            email: String::new(),
            password: SecretString::from(""),
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "password"]);
        assert_eq!(errors.first().unwrap().message, "Please enter your email address");
    }

    #[test]
    fn test_sign_in_rejects_bad_email_shape() {
        let form = SignInForm {
            email: "ada@localhost".to_string(),
            password: SecretString::from("anything"),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first().unwrap().message,
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_sign_up_valid() {
        let credentials = sign_up().validate().unwrap();
        assert_eq!(credentials.display_name, "Elena Rodriguez");
        assert_eq!(credentials.role, Role::Seller);
        assert!(credentials.phone.is_none());
    }

    #[test]
    fn test_sign_up_requires_both_names() {
        let mut form = sign_up();
        form.last_name = "  ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first().unwrap().message, "Please enter your full name");
    }

    #[test]
    fn test_sign_up_short_password() {
        let mut form = sign_up();
        form.password = SecretString::from("short");
        form.confirm_password = SecretString::from("short");
        let errors = form.validate().unwrap_err();
        assert!(errors.has("password"));
        assert!(!errors.has("confirm_password"));
        assert_eq!(
            errors.first().unwrap().message,
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let mut form = sign_up();
        form.confirm_password = SecretString::from("bronze-form");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first().unwrap().message, "Passwords do not match");
    }

    #[test]
    fn test_sign_up_requires_terms() {
        let mut form = sign_up();
        form.agree_to_terms = false;
        let errors = form.validate().unwrap_err();
        assert!(errors.has("agree_to_terms"));
    }

    #[test]
    fn test_profile_update_normalizes_fields() {
        let changes = profile().validate().unwrap();
        assert_eq!(changes.first_name, "Elena");
        assert!(changes.phone.is_none());
        assert_eq!(changes.bio.as_deref(), Some("Sculptor"));
        assert!(changes.avatar.is_none());
    }

    #[test]
    fn test_profile_update_rejects_blank_name_and_bad_email_together() {
        let mut update = profile();
        update.first_name = String::new();
        update.email = "not-an-email".to_string();
        let errors = update.validate().unwrap_err();
        assert!(errors.has("name"));
        assert!(errors.has("email"));
        assert_eq!(
            errors.first().unwrap().message,
            "First name and last name are required"
        );
    }

    #[test]
    fn test_profile_update_missing_email() {
        let mut update = profile();
        update.email = " ".to_string();
        let errors = update.validate().unwrap_err();
        assert_eq!(errors.first().unwrap().message, "Email is required");
    }

    #[test]
    fn test_password_reset_email_only_requires_presence() {
        assert_eq!(
            password_reset_email(" ").unwrap_err().first().unwrap().message,
            "Please enter your email address first"
        );
        assert_eq!(password_reset_email("ada").unwrap(), "ada");
        assert_eq!(
            password_reset_email(" ada@example.com ").unwrap(),
            "ada@example.com"
        );
    }

    #[test]
    fn test_google_credentials() {
        let credentials = google_credentials().unwrap();
        assert_eq!(credentials.email.as_str(), "user@gmail.com");
        assert_eq!(credentials.display_name, "Google User");
        assert_eq!(credentials.role, Role::Buyer);
    }

    #[test]
    fn test_profile_update_bio_limit() {
        let mut update = profile();
        update.bio = "a".repeat(MAX_BIO_LENGTH);
        assert!(update.validate().is_ok());
        update.bio = "a".repeat(MAX_BIO_LENGTH + 1);
        assert!(update.validate().unwrap_err().has("bio"));
    }
}
