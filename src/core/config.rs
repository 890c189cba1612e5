//! Backend URL configuration.
//!
//! The bundle is static, so the base URL is resolved at compile time:
//! `GALERIA_API_URL` overrides everything, otherwise debug builds talk to
//! a local backend and release builds to the deployed one.

const DEV_API_URL: &str = "http://localhost:8000";
const PROD_API_URL: &str = "https://galeria-backend.onrender.com";

/// Resolved backend location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the base URL from the compile-time environment.
    pub fn from_env() -> Self {
        let base_url = option_env!("GALERIA_API_URL")
            .unwrap_or(default_base_url())
            .to_string();
        Self { base_url }
    }

    /// Join the base URL with an endpoint path like `/api/users/login`.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_base_url() -> &'static str {
    if cfg!(debug_assertions) {
        DEV_API_URL
    } else {
        PROD_API_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_endpoint() {
        let config = ApiConfig {
            base_url: "http://localhost:8000".to_string(),
        };

        assert_eq!(
            config.api_url("/api/users/login"),
            "http://localhost:8000/api/users/login"
        );
    }

    #[test]
    fn api_url_tolerates_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://backend.example.com/".to_string(),
        };

        assert_eq!(
            config.api_url("/api/users/check/alice"),
            "https://backend.example.com/api/users/check/alice"
        );
    }

    #[test]
    fn from_env_returns_a_usable_config() {
        // The actual URL depends on the build environment; it just has to
        // be non-empty and join cleanly.
        let config = ApiConfig::from_env();
        assert!(!config.base_url.is_empty());
        assert!(config.api_url("/health").ends_with("/health"));
    }

    #[test]
    fn default_calls_from_env() {
        assert_eq!(ApiConfig::default(), ApiConfig::from_env());
    }
}
