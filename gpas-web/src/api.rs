use reqwest::{header, Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{
    ChatRequest, ChatResponse, DashboardStats, ExecuteResponse, Opportunity, PredictionsResponse,
    ScanResponse, TransactionsResponse, UpdateSettingsResponse, UserSettings,
};

use crate::error::ApiError;
use crate::session::SessionStore;

/// Lightweight API client for the GPAS dashboard.
///
/// Attaches the current bearer token to every outbound call (read from
/// the [`SessionStore`] at call time, never captured at construction),
/// and normalizes every failure into [`ApiError`]. One attempt per call;
/// no retry, no cache, no timeout.
#[derive(Clone, Debug)]
pub struct GpasClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl PartialEq for GpasClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl GpasClient {
    /// Create a new API client against `base_url`, authorizing calls with
    /// whatever credential `session` currently holds.
    #[must_use]
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Assemble a request: JSON content type, `Authorization: Bearer`
    /// iff a credential is present, then caller-supplied headers, which
    /// override the defaults on conflict.
    pub(crate) fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        extra_headers: &[(&str, &str)],
    ) -> RequestBuilder {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = self.session.token() {
            if let Ok(value) = header::HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(header::AUTHORIZATION, value);
            }
        }
        for (name, value) in extra_headers {
            if let (Ok(name), Ok(value)) = (
                header::HeaderName::from_bytes(name.as_bytes()),
                header::HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
        self.client
            .request(method, self.api_url(endpoint))
            .headers(headers)
    }

    /// Send a built request and translate the outcome.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|err| ApiError::Parse(err.to_string()))
    }

    /// Fetch the aggregate counters for the dashboard.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.execute(self.build_request(Method::GET, "/api/dashboard/stats", &[]))
            .await
    }

    /// Trigger a marketplace scan and return the opportunities it found.
    pub async fn scan_opportunities(&self) -> Result<ScanResponse, ApiError> {
        self.execute(self.build_request(Method::POST, "/api/arbitrage/scan", &[]))
            .await
    }

    /// Ask the service to buy the given opportunity.
    pub async fn execute_purchase(
        &self,
        opportunity: &Opportunity,
    ) -> Result<ExecuteResponse, ApiError> {
        self.execute(
            self.build_request(Method::POST, "/api/arbitrage/execute", &[])
                .json(opportunity),
        )
        .await
    }

    /// Fetch the transaction history.
    pub async fn transactions(&self) -> Result<TransactionsResponse, ApiError> {
        self.execute(self.build_request(Method::GET, "/api/arbitrage/transactions", &[]))
            .await
    }

    /// Fetch the AI's current product forecasts.
    pub async fn ai_predictions(&self) -> Result<PredictionsResponse, ApiError> {
        self.execute(self.build_request(Method::GET, "/api/ai/predictions", &[]))
            .await
    }

    /// Send one chat message to the AI.
    pub async fn chat(&self, message: &str) -> Result<ChatResponse, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        self.execute(
            self.build_request(Method::POST, "/api/ai/chat", &[])
                .json(&body),
        )
        .await
    }

    /// Persist the full settings record.
    pub async fn update_settings(
        &self,
        settings: &UserSettings,
    ) -> Result<UpdateSettingsResponse, ApiError> {
        self.execute(
            self.build_request(Method::PUT, "/api/settings/update", &[])
                .json(settings),
        )
        .await
    }
}
