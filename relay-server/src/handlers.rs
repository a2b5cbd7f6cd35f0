use axum::Json;
use axum::extract::{Query, State};
use serde_json::{Value, json};
use tracing::warn;

use relay_core::upstream::truncate_body;
use relay_core::{ForecastQuery, RelayError, ReverseQuery, SearchQuery};

use crate::app::AppState;

/// 7-day forecast relay to Open-Meteo.
pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Json<Value> {
    relay("open-meteo", state.open_meteo.forecast(&query).await)
}

/// Reverse-geocoding relay to Nominatim.
pub async fn reverse(
    State(state): State<AppState>,
    Query(query): Query<ReverseQuery>,
) -> Json<Value> {
    relay("nominatim", state.nominatim.reverse(query.lat, query.lon).await)
}

/// Place-search relay to Nominatim.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Value> {
    relay("nominatim", state.nominatim.search(&query.q).await)
}

/// Uniform envelope policy: the upstream document passes through verbatim,
/// and any relay failure becomes an in-band `{error: true, reason}` object
/// inside an HTTP 200, so the frontend deals with exactly one error shape.
fn relay(upstream: &str, result: Result<Value, RelayError>) -> Json<Value> {
    match result {
        Ok(document) => Json(document),
        Err(err) => {
            let reason = err.reason();
            warn!(upstream, reason = %truncate_body(&reason), "relay failed: {err}");
            Json(json!({ "error": true, "reason": reason }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_wraps_failures_in_envelope() {
        let err = RelayError::Status {
            status: axum::http::StatusCode::BAD_GATEWAY,
            body: "bad gateway".to_string(),
        };

        let Json(value) = relay("open-meteo", Err(err));

        assert_eq!(value["error"], true);
        assert_eq!(value["reason"], "bad gateway");
    }

    #[test]
    fn relay_passes_success_through_untouched() {
        let document = json!({ "current": { "temperature_2m": 3.2 } });

        let Json(value) = relay("open-meteo", Ok(document.clone()));

        assert_eq!(value, document);
    }
}
