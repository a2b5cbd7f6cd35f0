use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use relay_core::{Nominatim, OpenMeteo};

use crate::cors::CorsOptions;
use crate::handlers;

/// Shared upstream clients. Cloning is cheap: reqwest clients are handles
/// over a shared connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub open_meteo: OpenMeteo,
    pub nominatim: Nominatim,
}

impl AppState {
    /// State pointing at the production upstreams.
    pub fn new() -> Self {
        Self {
            open_meteo: OpenMeteo::new(),
            nominatim: Nominatim::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the relay router. The CORS policy and request tracing apply
/// uniformly to every route.
pub fn router(state: AppState, cors: &CorsOptions) -> Router {
    Router::new()
        .route("/weather", get(handlers::weather))
        .route("/api/reverse", get(handlers::reverse))
        .route("/api/search", get(handlers::search))
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer())
        .with_state(state)
}
