//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `GALLERY_CATALOG_PATH` - JSON catalog file replacing the built-in catalog
//! - `GALLERY_CART_FEEDBACK_MS` - "Added to cart" state duration (default: 1500)
//! - `GALLERY_WISHLIST_FEEDBACK_MS` - Wishlist pulse duration (default: 2000)
//! - `GALLERY_PROFILE_SAVE_MS` - Simulated profile save delay (default: 1000)
//! - `GALLERY_MAX_AVATAR_BYTES` - Avatar upload limit (default: 5242880)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_CART_FEEDBACK_MS: u64 = 1500;
const DEFAULT_WISHLIST_FEEDBACK_MS: u64 = 2000;
const DEFAULT_PROFILE_SAVE_MS: u64 = 1000;
const DEFAULT_MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog file to load instead of the built-in gallery catalog
    pub catalog_path: Option<PathBuf>,
    /// Visual feedback timings
    pub feedback: FeedbackConfig,
    /// Largest accepted avatar upload, in bytes
    pub max_avatar_bytes: usize,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production", "staging")
    pub sentry_environment: Option<String>,
}

/// Durations of the cosmetic feedback states shown after user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackConfig {
    /// How long the "added to cart" state stays before the dialog closes
    pub cart_added: Duration,
    /// How long the wishlist heart pulses after a toggle
    pub wishlist_pulse: Duration,
    /// Simulated latency of a profile save
    pub profile_save: Duration,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            cart_added: Duration::from_millis(DEFAULT_CART_FEEDBACK_MS),
            wishlist_pulse: Duration::from_millis(DEFAULT_WISHLIST_FEEDBACK_MS),
            profile_save: Duration::from_millis(DEFAULT_PROFILE_SAVE_MS),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            feedback: FeedbackConfig::default(),
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let feedback = FeedbackConfig {
            cart_added: get_millis(&lookup, "GALLERY_CART_FEEDBACK_MS", DEFAULT_CART_FEEDBACK_MS)?,
            wishlist_pulse: get_millis(
                &lookup,
                "GALLERY_WISHLIST_FEEDBACK_MS",
                DEFAULT_WISHLIST_FEEDBACK_MS,
            )?,
            profile_save: get_millis(&lookup, "GALLERY_PROFILE_SAVE_MS", DEFAULT_PROFILE_SAVE_MS)?,
        };

        let max_avatar_bytes = match get_optional(&lookup, "GALLERY_MAX_AVATAR_BYTES") {
            Some(value) => value.parse::<usize>().map_err(|e| {
                ConfigError::InvalidEnvVar("GALLERY_MAX_AVATAR_BYTES".to_string(), e.to_string())
            })?,
            None => DEFAULT_MAX_AVATAR_BYTES,
        };

        Ok(Self {
            catalog_path: get_optional(&lookup, "GALLERY_CATALOG_PATH").map(PathBuf::from),
            feedback,
            max_avatar_bytes,
            sentry_dsn: get_optional(&lookup, "SENTRY_DSN"),
            sentry_environment: get_optional(&lookup, "SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a millisecond duration with a default value.
fn get_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<Duration, ConfigError> {
    get_optional(lookup, key).map_or(Ok(Duration::from_millis(default)), |value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.feedback, FeedbackConfig::default());
        assert_eq!(config.feedback.cart_added, Duration::from_millis(1500));
        assert_eq!(config.max_avatar_bytes, 5 * 1024 * 1024);
        assert!(config.catalog_path.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("GALLERY_CART_FEEDBACK_MS", "250"),
            ("GALLERY_CATALOG_PATH", "catalog.json"),
            ("GALLERY_MAX_AVATAR_BYTES", "1024"),
            ("SENTRY_ENVIRONMENT", "staging"),
        ]))
        .unwrap();

        assert_eq!(config.feedback.cart_added, Duration::from_millis(250));
        assert_eq!(config.feedback.wishlist_pulse, Duration::from_millis(2000));
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.max_avatar_bytes, 1024);
        assert_eq!(config.sentry_environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("GALLERY_PROFILE_SAVE_MS", "  ")]))
                .unwrap();
        assert_eq!(config.feedback.profile_save, Duration::from_millis(1000));
    }

    #[test]
    fn test_invalid_duration_is_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[(
            "GALLERY_WISHLIST_FEEDBACK_MS",
            "soon",
        )]))
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "GALLERY_WISHLIST_FEEDBACK_MS")
        );
    }
}
