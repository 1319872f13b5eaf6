use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Subscription plan attached to an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Starter,
    Professional,
    Enterprise,
}

impl SubscriptionTier {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "professional" => Ok(Self::Professional),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err("unknown subscription tier"),
        }
    }
}

/// The signed-in account as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the account.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Email address the account was registered with.
    #[serde(default)]
    pub email: String,

    /// Current subscription plan.
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,

    /// Whether the AI is allowed to execute purchases unattended.
    #[serde(default)]
    pub auto_trading_enabled: bool,
}

/// Request body for `/api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,

    /// Plain-text password, sent over HTTPS only.
    pub password: String,
}

/// Request body for `/api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Plain-text password, sent over HTTPS only.
    pub password: String,
}

/// Success body returned by both auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Bearer token authorizing subsequent API calls.
    pub access_token: String,

    /// The authenticated account.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trip() {
        let user = User {
            id: 1,
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            subscription_tier: SubscriptionTier::Professional,
            auto_trading_enabled: true,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"subscription_tier\":\"professional\""));
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_user_tolerates_minimal_body() {
        // Auth service is free to omit everything but id and name.
        let parsed: User = serde_json::from_str(r#"{"id":1,"name":"Ana"}"#).unwrap();
        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.name, "Ana");
        assert_eq!(parsed.subscription_tier, SubscriptionTier::Free);
        assert!(!parsed.auto_trading_enabled);
    }

    #[test]
    fn test_subscription_tier_strings() {
        for tier in [
            SubscriptionTier::Free,
            SubscriptionTier::Starter,
            SubscriptionTier::Professional,
            SubscriptionTier::Enterprise,
        ] {
            assert_eq!(tier.as_str().parse::<SubscriptionTier>().unwrap(), tier);
        }
        assert!("platinum".parse::<SubscriptionTier>().is_err());
    }

    #[test]
    fn test_auth_response_shape() {
        let body = r#"{"access_token":"tok123","user":{"id":1,"name":"Ana"}}"#;
        let parsed: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "tok123");
        assert_eq!(parsed.user.name, "Ana");
    }
}
