//! Typed request/response bodies for the GPAS API.

pub mod arbitrage;
pub mod assistant;
pub mod dashboard;
pub mod errors;
pub mod settings;
pub mod user;
