//! Status and role enums for various entities.

use serde::{Deserialize, Serialize};

/// Account role chosen at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Browses and buys pieces.
    #[default]
    Buyer,
    /// Lists pieces through the seller dashboard.
    Seller,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buyer => write!(f, "buyer"),
            Self::Seller => write!(f, "seller"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Seller listing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Visible in the marketplace.
    Active,
    /// Not yet published. New listings start here.
    #[default]
    Draft,
    /// Purchased.
    Sold,
    /// Temporarily hidden by the seller.
    Paused,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Draft => write!(f, "draft"),
            Self::Sold => write!(f, "sold"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

/// Physical condition of a listed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCondition {
    #[default]
    New,
    Excellent,
    VeryGood,
    Good,
    Fair,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrips_through_str() {
        for role in [Role::Buyer, Role::Seller] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_listing_status_defaults_to_draft() {
        assert_eq!(ListingStatus::default(), ListingStatus::Draft);
    }

    #[test]
    fn test_condition_serializes_kebab_case() {
        let json = serde_json::to_string(&ItemCondition::VeryGood).unwrap();
        assert_eq!(json, "\"very-good\"");
    }
}
