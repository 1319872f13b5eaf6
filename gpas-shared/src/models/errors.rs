use serde::{Deserialize, Serialize};

/// Failure body returned by the GPAS API on any non-2xx status.
///
/// The `error` field is optional on the wire; callers fall back to a
/// generic message when it is absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable error message supplied by the server.
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract the server message, or `None` when the body carried none.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_with_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"invalid credentials"}"#).unwrap();
        assert_eq!(body.message(), Some("invalid credentials"));
    }

    #[test]
    fn test_error_body_without_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_error_body_empty_string_is_absent() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":""}"#).unwrap();
        assert_eq!(body.message(), None);
    }
}
