use serde::{Deserialize, Serialize};

use super::user::SubscriptionTier;

/// Condensed account view embedded in the dashboard stats payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    /// Display name.
    pub name: String,

    /// Current subscription plan.
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,

    /// Whether unattended trading is switched on.
    #[serde(default)]
    pub auto_trading_enabled: bool,
}

/// Aggregate trading counters for the dashboard stat cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TradingStats {
    /// Lifetime profit in EUR.
    pub total_profit: f64,

    /// Number of transactions ever executed.
    pub total_transactions: u32,

    /// Mean return on investment, percent.
    pub average_roi: f64,

    /// Opportunities awaiting execution.
    pub pending_transactions: u32,

    /// Purchases currently in flight.
    pub active_transactions: u32,

    /// Share of completed transactions that closed with a profit, percent.
    pub success_rate: f64,

    /// EUR spent from today's budget.
    pub daily_budget_used: f64,

    /// Today's total budget in EUR.
    pub daily_budget_total: f64,
}

impl TradingStats {
    /// Fraction of today's budget already spent, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn budget_used_fraction(&self) -> f64 {
        if self.daily_budget_total <= 0.0 {
            return 0.0;
        }
        (self.daily_budget_used / self.daily_budget_total).clamp(0.0, 1.0)
    }
}

/// Response body for `GET /api/dashboard/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    /// The account the stats belong to.
    pub user: AccountSummary,

    /// Aggregate counters.
    pub stats: TradingStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_shape() {
        let body = r#"{
            "user": {"name": "Ana", "subscription_tier": "professional", "auto_trading_enabled": true},
            "stats": {
                "total_profit": 15247.5,
                "total_transactions": 156,
                "average_roi": 304.0,
                "pending_transactions": 23,
                "active_transactions": 12,
                "success_rate": 87.5,
                "daily_budget_used": 2500.0,
                "daily_budget_total": 5000.0
            }
        }"#;

        let parsed: DashboardStats = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.user.name, "Ana");
        assert_eq!(parsed.stats.total_transactions, 156);
        assert!((parsed.stats.budget_used_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_budget_fraction_guards_zero_total() {
        let stats = TradingStats {
            daily_budget_used: 100.0,
            ..TradingStats::default()
        };
        assert_eq!(stats.budget_used_fraction(), 0.0);
    }
}
