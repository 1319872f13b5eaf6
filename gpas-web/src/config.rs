//! Frontend configuration module
//!
//! Resolves the GPAS API base URL at build time.

/// Placeholder default host; any deployment overrides it via `GPAS_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.gpas4.app";

/// Frontend configuration for the API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every API path is appended to.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("GPAS_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a new configuration instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_a_host() {
        let config = ApiConfig::new();
        assert!(config.base_url().starts_with("http"));
        assert!(!config.base_url().ends_with('/'));
    }
}
