#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared wire models for the GPAS4 dashboard.
//!
//! Every request and response body exchanged with the GPAS API is typed
//! here so that the web client deserializes into known shapes instead of
//! poking at untyped JSON.

pub mod models;

pub use models::arbitrage::{
    ExecuteResponse, Opportunity, OpportunityStatus, ScanResponse, TradeSide, Transaction,
    TransactionStatus, TransactionsResponse,
};
pub use models::assistant::{ChatRequest, ChatResponse, Prediction, PredictionsResponse};
pub use models::dashboard::{AccountSummary, DashboardStats, TradingStats};
pub use models::errors::ErrorBody;
pub use models::settings::{RiskLevel, TradingHours, UpdateSettingsResponse, UserSettings};
pub use models::user::{AuthResponse, LoginRequest, RegisterRequest, SubscriptionTier, User};
