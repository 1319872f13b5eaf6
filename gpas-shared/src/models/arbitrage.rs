use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a detected opportunity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStatus {
    Available,
    Analyzing,
    Pending,
    Executing,
}

impl OpportunityStatus {
    /// Wire token for the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Analyzing => "analyzing",
            Self::Pending => "pending",
            Self::Executing => "executing",
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single arbitrage opportunity as reported by the scanner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Scanner-assigned identifier.
    pub id: u64,

    /// Product title.
    pub product: String,

    /// Marketplace to buy from.
    pub source: String,

    /// Marketplace to sell on.
    pub target: String,

    /// Purchase price on the source marketplace, EUR.
    pub source_price: f64,

    /// Listing price on the target marketplace, EUR.
    pub target_price: f64,

    /// Expected gross profit, EUR.
    pub profit: f64,

    /// Expected return on investment, percent.
    pub roi: f64,

    /// Current status.
    pub status: OpportunityStatus,

    /// Product category label.
    #[serde(default)]
    pub category: String,

    /// Optional product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response body for `POST /api/arbitrage/scan`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScanResponse {
    /// Opportunities found by this scan, best first.
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
}

/// Response body for `POST /api/arbitrage/execute`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecuteResponse {
    /// Identifier of the transaction the purchase opened, when provided.
    #[serde(default)]
    pub transaction_id: Option<String>,

    /// Server acknowledgement message, when provided.
    #[serde(default)]
    pub message: Option<String>,
}

/// Direction of a recorded trade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Lifecycle of a recorded transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Processing,
    Failed,
}

impl TransactionStatus {
    /// Wire token for the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// History identifier, e.g. `TXN001`.
    pub id: String,

    /// Whether this row records the buy or the sell leg.
    #[serde(rename = "type")]
    pub side: TradeSide,

    /// Product title.
    pub product: String,

    /// Marketplace bought from.
    pub source: String,

    /// Marketplace sold on.
    pub target: String,

    /// Purchase price per unit, EUR.
    pub buy_price: f64,

    /// Sale price per unit, EUR.
    pub sell_price: f64,

    /// Gross profit, EUR.
    pub profit: f64,

    /// Return on investment, percent.
    pub roi: f64,

    /// Current status.
    pub status: TransactionStatus,

    /// When the transaction was opened.
    pub date: DateTime<Utc>,

    /// Units traded.
    pub quantity: u32,

    /// Marketplace and payment fees, EUR.
    pub fees: f64,

    /// Profit after fees, EUR.
    pub net_profit: f64,
}

/// Response body for `GET /api/arbitrage/transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    /// Recorded transactions, newest first.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opportunity_wire_names_are_camel_case() {
        let body = r#"{
            "id": 1,
            "product": "iPhone 15 Pro 128GB",
            "source": "AliExpress",
            "target": "Amazon US",
            "sourcePrice": 650.0,
            "targetPrice": 999.0,
            "profit": 349.0,
            "roi": 53.7,
            "status": "available",
            "category": "Electronics"
        }"#;

        let parsed: Opportunity = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, OpportunityStatus::Available);
        assert!((parsed.source_price - 650.0).abs() < f64::EPSILON);

        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains("\"sourcePrice\""));
        assert!(json.contains("\"targetPrice\""));
        assert!(!json.contains("\"source_price\""));
    }

    #[test]
    fn test_transaction_type_field_maps_to_side() {
        let body = r#"{
            "id": "TXN001",
            "type": "buy",
            "product": "iPhone 15 Pro 256GB",
            "source": "AliExpress",
            "target": "Amazon US",
            "buyPrice": 650.0,
            "sellPrice": 999.0,
            "profit": 349.0,
            "roi": 53.7,
            "status": "completed",
            "date": "2024-01-15T10:30:00Z",
            "quantity": 1,
            "fees": 45.5,
            "netProfit": 303.5
        }"#;

        let parsed: Transaction = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.side, TradeSide::Buy);
        assert_eq!(parsed.status, TransactionStatus::Completed);
        assert!((parsed.net_profit - 303.5).abs() < f64::EPSILON);

        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains("\"type\":\"buy\""));
        assert!(json.contains("\"netProfit\""));
    }

    #[test]
    fn test_scan_response_tolerates_missing_list() {
        let parsed: ScanResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.opportunities.is_empty());
    }
}
