//! Hard-coded sample data substituted when a read operation fails.
//!
//! Write operations (purchase execution, settings update) never fall
//! back; they surface their error inline instead.

use chrono::{DateTime, TimeZone, Utc};
use shared::{
    AccountSummary, DashboardStats, Opportunity, OpportunityStatus, Prediction, SubscriptionTier,
    TradeSide, TradingStats, Transaction, TransactionStatus,
};

fn date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Dashboard counters shown when `/api/dashboard/stats` is unreachable.
#[must_use]
pub fn sample_dashboard_stats() -> DashboardStats {
    DashboardStats {
        user: AccountSummary {
            name: "Demo User".to_string(),
            subscription_tier: SubscriptionTier::Professional,
            auto_trading_enabled: true,
        },
        stats: TradingStats {
            total_profit: 15_247.50,
            total_transactions: 156,
            average_roi: 304.0,
            pending_transactions: 23,
            active_transactions: 12,
            success_rate: 87.5,
            daily_budget_used: 2500.0,
            daily_budget_total: 5000.0,
        },
    }
}

/// Recent opportunities teaser for the dashboard.
#[must_use]
pub fn sample_recent_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: 1,
            product: "iPhone 15 Pro 256GB".to_string(),
            source: "AliExpress".to_string(),
            target: "Amazon UK".to_string(),
            source_price: 724.0,
            target_price: 999.0,
            profit: 275.0,
            roi: 312.0,
            status: OpportunityStatus::Executing,
            category: "Electronics".to_string(),
            image: None,
        },
        Opportunity {
            id: 2,
            product: "MacBook Air M2".to_string(),
            source: "Alibaba".to_string(),
            target: "eBay Global".to_string(),
            source_price: 780.0,
            target_price: 1200.0,
            profit: 420.0,
            roi: 285.0,
            status: OpportunityStatus::Analyzing,
            category: "Electronics".to_string(),
            image: None,
        },
        Opportunity {
            id: 3,
            product: "AirPods Pro 2".to_string(),
            source: "DHgate".to_string(),
            target: "Amazon DE".to_string(),
            source_price: 114.0,
            target_price: 199.0,
            profit: 85.0,
            roi: 245.0,
            status: OpportunityStatus::Pending,
            category: "Audio".to_string(),
            image: None,
        },
    ]
}

/// Scanner results shown when a scan fails or finds nothing yet.
#[must_use]
pub fn sample_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: 1,
            product: "iPhone 15 Pro 128GB".to_string(),
            source: "AliExpress".to_string(),
            target: "Amazon US".to_string(),
            source_price: 650.0,
            target_price: 999.0,
            profit: 349.0,
            roi: 53.7,
            status: OpportunityStatus::Available,
            category: "Electronics".to_string(),
            image: None,
        },
        Opportunity {
            id: 2,
            product: "Smart Watch Series 8".to_string(),
            source: "DHgate".to_string(),
            target: "eBay".to_string(),
            source_price: 45.0,
            target_price: 199.0,
            profit: 154.0,
            roi: 342.2,
            status: OpportunityStatus::Analyzing,
            category: "Electronics".to_string(),
            image: None,
        },
        Opportunity {
            id: 3,
            product: "Wireless Headphones Pro".to_string(),
            source: "Alibaba".to_string(),
            target: "Amazon EU".to_string(),
            source_price: 25.0,
            target_price: 89.0,
            profit: 64.0,
            roi: 256.0,
            status: OpportunityStatus::Available,
            category: "Audio".to_string(),
            image: None,
        },
    ]
}

/// Transaction history shown when `/api/arbitrage/transactions` fails.
#[must_use]
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN001".to_string(),
            side: TradeSide::Buy,
            product: "iPhone 15 Pro 256GB".to_string(),
            source: "AliExpress".to_string(),
            target: "Amazon US".to_string(),
            buy_price: 650.0,
            sell_price: 999.0,
            profit: 349.0,
            roi: 53.7,
            status: TransactionStatus::Completed,
            date: date(2024, 1, 15, 10, 30),
            quantity: 1,
            fees: 45.50,
            net_profit: 303.50,
        },
        Transaction {
            id: "TXN002".to_string(),
            side: TradeSide::Buy,
            product: "Smart Watch Series 8".to_string(),
            source: "DHgate".to_string(),
            target: "eBay".to_string(),
            buy_price: 45.0,
            sell_price: 199.0,
            profit: 154.0,
            roi: 342.2,
            status: TransactionStatus::Pending,
            date: date(2024, 1, 14, 14, 20),
            quantity: 2,
            fees: 23.80,
            net_profit: 130.20,
        },
        Transaction {
            id: "TXN003".to_string(),
            side: TradeSide::Sell,
            product: "Wireless Headphones Pro".to_string(),
            source: "Alibaba".to_string(),
            target: "Amazon EU".to_string(),
            buy_price: 25.0,
            sell_price: 89.0,
            profit: 64.0,
            roi: 256.0,
            status: TransactionStatus::Processing,
            date: date(2024, 1, 13, 9, 15),
            quantity: 5,
            fees: 32.10,
            net_profit: 287.90,
        },
        Transaction {
            id: "TXN004".to_string(),
            side: TradeSide::Buy,
            product: "Gaming Keyboard RGB".to_string(),
            source: "AliExpress".to_string(),
            target: "Amazon US".to_string(),
            buy_price: 35.0,
            sell_price: 79.0,
            profit: 44.0,
            roi: 125.7,
            status: TransactionStatus::Failed,
            date: date(2024, 1, 12, 16, 45),
            quantity: 3,
            fees: 11.85,
            net_profit: 0.0,
        },
        Transaction {
            id: "TXN005".to_string(),
            side: TradeSide::Sell,
            product: "Fitness Tracker V2".to_string(),
            source: "DHgate".to_string(),
            target: "eBay".to_string(),
            buy_price: 28.0,
            sell_price: 95.0,
            profit: 67.0,
            roi: 239.3,
            status: TransactionStatus::Completed,
            date: date(2024, 1, 11, 11, 30),
            quantity: 4,
            fees: 28.40,
            net_profit: 240.60,
        },
    ]
}

/// Forecasts shown when `/api/ai/predictions` fails.
#[must_use]
pub fn sample_predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            id: 1,
            product: "Smart Home Kit".to_string(),
            confidence: 94.0,
            expected_roi: 275.0,
            timeframe: "3-7 days".to_string(),
            reason: "Rising trend in home automation".to_string(),
        },
        Prediction {
            id: 2,
            product: "Gaming Headset Pro".to_string(),
            confidence: 89.0,
            expected_roi: 198.0,
            timeframe: "1-5 days".to_string(),
            reason: "Popular game launch boosted demand".to_string(),
        },
        Prediction {
            id: 3,
            product: "Fitness Tracker V2".to_string(),
            confidence: 92.0,
            expected_roi: 312.0,
            timeframe: "2-6 days".to_string(),
            reason: "Fitness season plus influencer marketing".to_string(),
        },
    ]
}

/// Greeting the assistant opens every conversation with.
pub const WELCOME_MESSAGE: &str = "Hi! I'm your arbitrage AI. I can analyze markets, \
suggest products, or execute automatic purchases. How can I help you today?";

/// Keyword-matched reply used when `/api/ai/chat` is unreachable.
#[must_use]
pub fn canned_reply(message: &str) -> String {
    let lower = message.to_lowercase();

    if lower.contains("product") || lower.contains("opportunit") {
        "Based on my analysis, three products stand out right now: iPhone 15 Pro (ROI 312%), \
         Smart Watch Series 8 (ROI 287%) and Wireless Headphones (ROI 256%). \
         Want me to execute an automatic purchase?"
            .to_string()
    } else if lower.contains("execute") || lower.contains("buy") {
        "Executing the iPhone 15 Pro purchase: buying on AliExpress at \u{20ac}650 and listing \
         on Amazon US at \u{20ac}999. Expected profit \u{20ac}349 (53.7% ROI). Transaction started!"
            .to_string()
    } else if lower.contains("market") || lower.contains("trend") {
        "Current market view: electronics up 15%, led by smartphones and wearables. \
         China-to-Europe routes carry the best margins. The next 7 days look ideal for arbitrage."
            .to_string()
    } else if lower.contains("risk") || lower.contains("safe") {
        "Risk management is active: the portfolio is diversified across 5 categories with at \
         most 20% exposure per product. Historical success rate: 87.5%."
            .to_string()
    } else {
        "Understood! I can help with market analysis, purchase execution, risk management or \
         trend forecasts. What would you like to do?"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_reply_keyword_routing() {
        assert!(canned_reply("any good products today?").contains("iPhone 15 Pro"));
        assert!(canned_reply("please execute that").contains("Transaction started"));
        assert!(canned_reply("how is the market?").contains("electronics up 15%"));
        assert!(canned_reply("is this safe?").contains("Risk management"));
        assert!(canned_reply("hello").contains("What would you like to do?"));
    }

    #[test]
    fn test_sample_data_is_nonempty() {
        assert_eq!(sample_opportunities().len(), 3);
        assert_eq!(sample_transactions().len(), 5);
        assert_eq!(sample_predictions().len(), 3);
        assert!(sample_dashboard_stats().stats.total_profit > 0.0);
    }
}
