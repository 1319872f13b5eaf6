use shared::ErrorBody;
use thiserror::Error;

/// Fallback shown when an HTTP failure body carried no `error` field.
pub const GENERIC_REQUEST_FAILED: &str = "request failed";

/// Shown for any failure where the server was never reached.
pub const GENERIC_CONNECTION_ERROR: &str = "Unable to connect to server";

/// Everything that can go wrong between a view and the GPAS API.
///
/// `Display` is the user-facing message: views render it directly in
/// inline alerts. None of these are retried and none are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Rejected locally before any network call.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        /// HTTP status code of the failure response.
        status: u16,
        /// Server-provided message, or [`GENERIC_REQUEST_FAILED`].
        message: String,
    },

    /// The request never produced a response. The payload holds the
    /// transport detail for the console; users get the generic message.
    #[error("{GENERIC_CONNECTION_ERROR}")]
    Transport(String),

    /// The response body was not valid JSON, or not the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status code and the raw body text,
    /// preferring the server's `error` field when the body parses.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message().map(str::to_string))
            .unwrap_or_else(|| GENERIC_REQUEST_FAILED.to_string());
        Self::Http { status, message }
    }

    /// True when the failure happened without a server response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_server_message() {
        let err = ApiError::from_response(401, r#"{"error":"invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 401,
                message: "invalid credentials".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_http_error_falls_back_when_field_absent() {
        let err = ApiError::from_response(500, r#"{"detail":"boom"}"#);
        assert_eq!(err.to_string(), GENERIC_REQUEST_FAILED);
    }

    #[test]
    fn test_http_error_falls_back_on_non_json_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), GENERIC_REQUEST_FAILED);
    }

    #[test]
    fn test_transport_error_displays_generic_message() {
        let err = ApiError::Transport("dns lookup failed".to_string());
        assert_eq!(err.to_string(), GENERIC_CONNECTION_ERROR);
        assert!(err.is_transport());
    }

    #[test]
    fn test_validation_error_displays_its_message() {
        let err = ApiError::Validation("Password must be at least 6 characters".to_string());
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
