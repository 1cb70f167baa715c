//! Deployment configuration for the API client.

/// Used when `HBNB_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `HBNB_API_URL` from the build environment. The frontend ships as
    /// a static bundle, so the value is baked in at compile time.
    pub fn from_env() -> Self {
        Self::new(option_env!("HBNB_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
