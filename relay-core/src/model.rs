use serde::Deserialize;

/// Parameters for a forecast request, as they arrive on the query string.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastQuery {
    pub lat: f64,
    pub lon: f64,
    /// IANA timezone name, or "auto" to let the upstream resolve it from the coordinates.
    #[serde(default = "default_timezone")]
    pub tz: String,
}

/// Parameters for a reverse-geocoding request.
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Parameters for a free-text place search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

fn default_timezone() -> String {
    "auto".to_string()
}
