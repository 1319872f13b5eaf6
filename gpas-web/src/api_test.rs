//! Tests for the API client functionality
//!
//! Validates request construction (URL joining, authorization and
//! content-type headers) and the per-operation endpoint contract.

#[cfg(test)]
mod tests {
    use crate::api::GpasClient;
    use crate::session::{MemoryVault, SessionStore, SessionVault, TOKEN_KEY, USER_KEY};
    use reqwest::Method;
    use std::sync::Arc;

    fn anonymous_client() -> GpasClient {
        let session = SessionStore::with_vault("http://localhost:5001", Arc::new(MemoryVault::default()));
        session.initialize();
        GpasClient::new("http://localhost:5001", session)
    }

    fn authenticated_client(token: &str) -> GpasClient {
        let vault = Arc::new(MemoryVault::default());
        vault.write(TOKEN_KEY, token);
        vault.write(USER_KEY, r#"{"id":1,"name":"Ana"}"#);
        let session = SessionStore::with_vault("http://localhost:5001", vault);
        session.initialize();
        GpasClient::new("http://localhost:5001", session)
    }

    /// Tests API client creation trims trailing slashes off the base URL.
    #[test]
    fn test_base_url_is_trimmed() {
        let session = SessionStore::with_vault("http://localhost:5001", Arc::new(MemoryVault::default()));
        let client = GpasClient::new("http://localhost:5001///", session);
        let request = client
            .build_request(Method::GET, "/api/dashboard/stats", &[])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5001/api/dashboard/stats"
        );
    }

    /// Tests endpoint paths join regardless of leading slash.
    #[test]
    fn test_api_url_joining() {
        let client = anonymous_client();
        for endpoint in ["/api/arbitrage/scan", "api/arbitrage/scan"] {
            let request = client
                .build_request(Method::POST, endpoint, &[])
                .build()
                .unwrap();
            assert_eq!(
                request.url().as_str(),
                "http://localhost:5001/api/arbitrage/scan"
            );
        }
    }

    /// Tests that a present credential produces a bearer header.
    #[test]
    fn test_authorization_header_present_when_logged_in() {
        let client = authenticated_client("tok123");
        let request = client
            .build_request(Method::GET, "/api/dashboard/stats", &[])
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok123"
        );
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    /// Tests that no authorization header is sent while anonymous.
    #[test]
    fn test_authorization_header_absent_when_anonymous() {
        let client = anonymous_client();
        let request = client
            .build_request(Method::GET, "/api/arbitrage/transactions", &[])
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    /// Tests that the credential is read at call time, not captured.
    #[test]
    fn test_credential_changes_are_honored_between_calls() {
        let vault = Arc::new(MemoryVault::default());
        vault.write(TOKEN_KEY, "tok123");
        vault.write(USER_KEY, r#"{"id":1,"name":"Ana"}"#);
        let session = SessionStore::with_vault("http://localhost:5001", vault);
        session.initialize();
        let client = GpasClient::new("http://localhost:5001", session.clone());

        let before = client
            .build_request(Method::GET, "/api/dashboard/stats", &[])
            .build()
            .unwrap();
        assert!(before.headers().get("authorization").is_some());

        session.logout();

        let after = client
            .build_request(Method::GET, "/api/dashboard/stats", &[])
            .build()
            .unwrap();
        assert!(after.headers().get("authorization").is_none());
    }

    /// Tests that caller-supplied headers override the defaults.
    #[test]
    fn test_extra_headers_override_defaults() {
        let client = authenticated_client("tok123");
        let request = client
            .build_request(
                Method::POST,
                "/api/arbitrage/scan",
                &[("Content-Type", "text/plain"), ("X-Scan-Depth", "full")],
            )
            .build()
            .unwrap();
        assert_eq!(request.headers().get("content-type").unwrap(), "text/plain");
        assert_eq!(request.headers().get("x-scan-depth").unwrap(), "full");
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok123"
        );
    }

    /// Tests the fixed endpoint table of the derived operations.
    #[test]
    fn test_operation_endpoints() {
        let client = anonymous_client();
        let cases = [
            (Method::GET, "/api/dashboard/stats"),
            (Method::POST, "/api/arbitrage/scan"),
            (Method::POST, "/api/arbitrage/execute"),
            (Method::GET, "/api/arbitrage/transactions"),
            (Method::GET, "/api/ai/predictions"),
            (Method::POST, "/api/ai/chat"),
            (Method::PUT, "/api/settings/update"),
        ];
        for (method, endpoint) in cases {
            let request = client
                .build_request(method.clone(), endpoint, &[])
                .build()
                .unwrap();
            assert_eq!(request.method(), &method);
            assert_eq!(
                request.url().path(),
                endpoint,
                "endpoint {endpoint} should survive URL joining"
            );
        }
    }
}
