use crate::domain::LookupError;

pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_CIVIC_URL: &str = "https://www.googleapis.com/civicinfo/v2/representatives";

const API_KEY_VAR: &str = "REPRESENT_API_KEY";
const GEOCODING_URL_VAR: &str = "REPRESENT_GEOCODING_URL";
const CIVIC_URL_VAR: &str = "REPRESENT_CIVIC_URL";

/// Immutable provider configuration handed to adapter constructors at
/// startup. Built once, never mutated afterwards; the key is never embedded
/// in source.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_key: String,
    geocoding_url: String,
    civic_url: String,
}

impl ApiConfig {
    pub fn new(
        api_key: impl Into<String>,
        geocoding_url: impl Into<String>,
        civic_url: impl Into<String>,
    ) -> Self {
        let geocoding_url: String = geocoding_url.into();
        let civic_url: String = civic_url.into();
        Self {
            api_key: api_key.into(),
            geocoding_url: geocoding_url.trim_end_matches('/').to_string(),
            civic_url: civic_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads configuration from the environment:
    ///
    /// | Variable                  | Default                  | Purpose            |
    /// |---------------------------|--------------------------|--------------------|
    /// | `REPRESENT_API_KEY`       | — (required)             | Provider API key   |
    /// | `REPRESENT_GEOCODING_URL` | Google Geocoding API     | Geocoding endpoint |
    /// | `REPRESENT_CIVIC_URL`     | Google Civic Information | Civic endpoint     |
    pub fn from_env() -> Result<Self, LookupError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| LookupError::auth(format!("{API_KEY_VAR} is not set")))?;
        let geocoding_url = std::env::var(GEOCODING_URL_VAR)
            .unwrap_or_else(|_| DEFAULT_GEOCODING_URL.to_string());
        let civic_url =
            std::env::var(CIVIC_URL_VAR).unwrap_or_else(|_| DEFAULT_CIVIC_URL.to_string());

        Ok(Self::new(api_key, geocoding_url, civic_url))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn geocoding_url(&self) -> &str {
        &self.geocoding_url
    }

    pub fn civic_url(&self) -> &str {
        &self.civic_url
    }
}
