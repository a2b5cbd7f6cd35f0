use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::model::ForecastQuery;

use super::RelayError;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com";

/// Current-conditions variables requested on every forecast call.
const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "is_day",
    "precipitation",
    "wind_speed_10m",
    "wind_direction_10m",
    "weather_code",
    "surface_pressure",
    "cloud_cover",
];

const HOURLY_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "precipitation",
    "cloud_cover",
    "wind_speed_10m",
];

const DAILY_FIELDS: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "uv_index_max",
    "sunrise",
    "sunset",
    "precipitation_sum",
];

const FORECAST_DAYS: u8 = 7;

/// Client for the Open-Meteo forecast API.
///
/// The field sets are fixed: the relay always requests the same current,
/// hourly and daily variables for a 7-day window, and passes the upstream
/// document through unmodified.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    http: Client,
    base_url: String,
}

impl OpenMeteo {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_URL)
    }

    /// Point the client at a different base URL, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the 7-day forecast for the given coordinates.
    ///
    /// Returns the upstream JSON document verbatim. A non-success upstream
    /// status becomes [`RelayError::Status`] carrying the raw body text.
    pub async fn forecast(&self, query: &ForecastQuery) -> Result<Value, RelayError> {
        let url = format!("{}/v1/forecast", self.base_url);

        let params = [
            ("latitude", query.lat.to_string()),
            ("longitude", query.lon.to_string()),
            ("current", CURRENT_FIELDS.join(",")),
            ("hourly", HOURLY_FIELDS.join(",")),
            ("daily", DAILY_FIELDS.join(",")),
            ("forecast_days", FORECAST_DAYS.to_string()),
            ("timezone", query.tz.clone()),
        ];

        debug!(lat = query.lat, lon = query.lon, tz = %query.tz, "requesting forecast");

        let res = self.http.get(&url).query(&params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(RelayError::Status { status, body });
        }

        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self::new()
    }
}
