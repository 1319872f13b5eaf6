use serde::{Deserialize, Serialize};

/// One product forecast from the AI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Forecast identifier.
    pub id: u64,

    /// Product title.
    pub product: String,

    /// Model confidence, percent.
    pub confidence: f64,

    /// Expected return on investment, percent.
    #[serde(rename = "expectedROI")]
    pub expected_roi: f64,

    /// Human-readable execution window, e.g. `3-7 days`.
    pub timeframe: String,

    /// Why the model likes this product.
    pub reason: String,
}

/// Response body for `GET /api/ai/predictions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionsResponse {
    /// Current forecasts, highest confidence first.
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// Request body for `POST /api/ai/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Response body for `POST /api/ai/chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The assistant's reply, when the service produced one.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_expected_roi_wire_name() {
        let body = r#"{
            "id": 1,
            "product": "Smart Home Kit",
            "confidence": 94.0,
            "expectedROI": 275.0,
            "timeframe": "3-7 days",
            "reason": "Rising trend in home automation"
        }"#;

        let parsed: Prediction = serde_json::from_str(body).unwrap();
        assert!((parsed.expected_roi - 275.0).abs() < f64::EPSILON);

        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains("\"expectedROI\""));
    }

    #[test]
    fn test_chat_response_tolerates_empty_body() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.message.is_none());
    }
}
