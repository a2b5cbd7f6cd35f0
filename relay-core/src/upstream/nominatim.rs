use reqwest::Client;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::debug;

use super::RelayError;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Identifying header required by the Nominatim usage policy.
const RELAY_USER_AGENT: &str = "WeatherApp/1.0";

/// Number of results requested from the place search endpoint.
const SEARCH_LIMIT: u8 = 5;

/// Client for the Nominatim (OpenStreetMap) geocoding API.
#[derive(Debug, Clone)]
pub struct Nominatim {
    http: Client,
    base_url: String,
}

impl Nominatim {
    pub fn new() -> Self {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Point the client at a different base URL, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve coordinates to an address document.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Value, RelayError> {
        let url = format!("{}/reverse", self.base_url);

        let params = [
            ("format", "json".to_string()),
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
        ];

        self.get_json(&url, &params).await
    }

    /// Free-text place search, capped at [`SEARCH_LIMIT`] results.
    pub async fn search(&self, query: &str) -> Result<Value, RelayError> {
        let url = format!("{}/search", self.base_url);

        let params = [
            ("format", "json".to_string()),
            ("q", query.to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
        ];

        self.get_json(&url, &params).await
    }

    async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, RelayError> {
        debug!(%url, "relaying geocoding request");

        let res = self
            .http
            .get(url)
            .query(params)
            .header(USER_AGENT, RELAY_USER_AGENT)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(RelayError::Status { status, body });
        }

        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

impl Default for Nominatim {
    fn default() -> Self {
        Self::new()
    }
}
