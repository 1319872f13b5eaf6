use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk appetite for unattended trading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    /// Wire token for the level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When the AI is allowed to trade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TradingHours {
    #[default]
    Always,
    BusinessHours,
    Custom,
}

/// Full settings record sent to `PUT /api/settings/update`.
///
/// Wire names are camelCase with the historical `minROI` exception.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    // Profile
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,

    // Trading
    pub auto_trading: bool,
    #[serde(rename = "minROI")]
    pub min_roi: u32,
    pub max_investment: f64,
    pub risk_level: RiskLevel,
    pub trading_hours: TradingHours,

    // Notifications
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub opportunity_alerts: bool,
    pub profit_alerts: bool,
    pub risk_alerts: bool,

    // Marketplace API keys
    #[serde(default)]
    pub aliexpress_key: String,
    #[serde(default)]
    pub amazon_key: String,
    #[serde(default)]
    pub ebay_key: String,

    // Advanced
    #[serde(default)]
    pub webhook_url: String,
    pub api_access: bool,
    pub data_retention: u32,
    pub two_factor_auth: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            country: "PT".to_string(),
            auto_trading: true,
            min_roi: 25,
            max_investment: 5000.0,
            risk_level: RiskLevel::Medium,
            trading_hours: TradingHours::Always,
            email_notifications: true,
            push_notifications: true,
            opportunity_alerts: true,
            profit_alerts: true,
            risk_alerts: true,
            aliexpress_key: String::new(),
            amazon_key: String::new(),
            ebay_key: String::new(),
            webhook_url: String::new(),
            api_access: false,
            data_retention: 90,
            two_factor_auth: false,
        }
    }
}

/// Response body for `PUT /api/settings/update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateSettingsResponse {
    /// Server acknowledgement message, when provided.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_wire_names() {
        let settings = UserSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"minROI\":25"));
        assert!(json.contains("\"autoTrading\":true"));
        assert!(json.contains("\"riskLevel\":\"medium\""));
        assert!(json.contains("\"tradingHours\":\"always\""));
        assert!(json.contains("\"twoFactorAuth\":false"));
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = UserSettings::default();
        settings.name = "Ana".to_string();
        settings.risk_level = RiskLevel::High;
        settings.min_roi = 40;

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: UserSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
