//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for every fallible session operation.
//! Errors are never fatal: the session turns each one into an error
//! notification via [`AppError::user_message`] and records a Sentry breadcrumb.

use std::fmt;

use thiserror::Error;

use crate::catalog::CatalogError;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name (e.g., "email", "first_name").
    pub field: &'static str,
    /// Message shown to the user.
    pub message: String,
}

/// Field-level validation failures from a form submission.
///
/// Failures are kept in the order the form checks them, so the first entry is
/// the one a single-toast UI should display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a failure for `field`.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Returns `true` if no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded failures, in check order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The first recorded failure, if any.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Returns `true` if `field` has at least one failure.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` if any failure was recorded.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Form input failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Action requires a signed-in identity.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl AppError {
    /// Message suitable for a transient error notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors
                .first()
                .map_or_else(|| "Please check the form".to_string(), |e| e.message.clone()),
            Self::NotAuthenticated => "Please sign in to continue".to_string(),
            Self::NotFound(_) => "That item is no longer available".to_string(),
            Self::Catalog(_) => "The catalog could not be loaded".to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after sign-in to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on sign-out to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "3")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("sp9".to_string());
        assert_eq!(err.to_string(), "Not found: sp9");
        assert_eq!(AppError::NotAuthenticated.to_string(), "Not authenticated");
    }

    #[test]
    fn test_validation_errors_keep_check_order() {
        let mut errors = ValidationErrors::new();
        errors.add("first_name", "First name and last name are required");
        errors.add("email", "Please enter a valid email address");

        assert!(errors.has("email"));
        assert!(!errors.has("phone"));
        assert_eq!(
            errors.to_string(),
            "first_name: First name and last name are required; email: Please enter a valid email address"
        );

        let err = AppError::from(errors);
        assert_eq!(err.user_message(), "First name and last name are required");
    }

    #[test]
    fn test_empty_validation_errors_into_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_recorded_failures_propagate_as_app_error() {
        fn check(errors: ValidationErrors) -> Result<()> {
            errors.into_result()?;
            Ok(())
        }

        let mut errors = ValidationErrors::new();
        errors.add("avatar", "Please choose an image file");
        let err = check(errors).unwrap_err();
        assert!(matches!(&err, AppError::Validation(e) if e.has("avatar")));
        assert_eq!(err.user_message(), "Please choose an image file");
        assert!(check(ValidationErrors::new()).is_ok());
    }
}
