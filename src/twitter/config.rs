//! # Twitter Search Configuration
//!
//! Constants and the injected configuration value for the upstream search API.

/// RapidAPI host identifier for the twitter154 API
pub const DEFAULT_API_HOST: &str = "twitter154.p.rapidapi.com";

/// Path of the search endpoint, relative to the base URL
pub const SEARCH_PATH: &str = "/search/search";

/// Header carrying the RapidAPI credential
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header carrying the RapidAPI host identifier
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Default number of results requested per search
pub const DEFAULT_LIMIT: u32 = 10;

/// Environment variable holding the credential
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Read-only configuration for the search gateway, built once at startup.
#[derive(Clone)]
pub struct TwitterConfig {
    api_key: Option<String>,
    api_host: String,
    base_url: String,
}

impl TwitterConfig {
    /// Create a configuration targeting the public twitter154 endpoint
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            api_host: DEFAULT_API_HOST.to_string(),
            base_url: format!("https://{DEFAULT_API_HOST}"),
        }
    }

    /// Override the host identifier sent in `x-rapidapi-host`.
    ///
    /// The base URL follows the host unless it was set explicitly afterwards.
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self.base_url = format!("https://{}", self.api_host);
        self
    }

    /// Override the base URL requests are sent to (scheme and authority, no path)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The credential, if one was configured and is non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the search endpoint
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

// Keeps the credential out of logs and panic messages.
impl std::fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_url() {
        let config = TwitterConfig::new(Some("key".to_string()));
        assert_eq!(
            config.search_url(),
            "https://twitter154.p.rapidapi.com/search/search"
        );
        assert_eq!(config.api_host(), DEFAULT_API_HOST);
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let config = TwitterConfig::new(None).with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.search_url(), "http://127.0.0.1:8080/search/search");
    }

    #[test]
    fn test_api_host_override_moves_base_url() {
        let config = TwitterConfig::new(None).with_api_host("example.p.rapidapi.com");
        assert_eq!(config.base_url(), "https://example.p.rapidapi.com");
        assert_eq!(config.api_host(), "example.p.rapidapi.com");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        assert!(TwitterConfig::new(Some("   ".to_string())).api_key().is_none());
        assert!(TwitterConfig::new(None).api_key().is_none());
        assert_eq!(
            TwitterConfig::new(Some("abc".to_string())).api_key(),
            Some("abc")
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = TwitterConfig::new(Some("super-secret".to_string()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
