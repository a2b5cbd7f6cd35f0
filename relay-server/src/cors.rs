use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Cross-origin policy for the whole router.
///
/// An empty list means "any". The default is fully permissive with
/// credentials allowed, matching what a browser frontend served from an
/// arbitrary origin needs during development.
#[derive(Debug, Clone)]
pub struct CorsOptions {
    pub allowed_origins: Vec<HeaderValue>,
    pub allowed_methods: Vec<Method>,
    pub allowed_headers: Vec<HeaderName>,
    pub allow_credentials: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_methods: Vec::new(),
            allowed_headers: Vec::new(),
            allow_credentials: true,
        }
    }
}

impl CorsOptions {
    /// Build the tower-http layer applied to every route.
    ///
    /// Browsers reject the `*` wildcard combined with credentials, so the
    /// permissive form mirrors the request's origin/method/headers instead of
    /// emitting `*`.
    pub fn layer(&self) -> CorsLayer {
        let origins = if self.allowed_origins.is_empty() {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::list(self.allowed_origins.clone())
        };

        let methods = if self.allowed_methods.is_empty() {
            AllowMethods::mirror_request()
        } else {
            AllowMethods::list(self.allowed_methods.clone())
        };

        let headers = if self.allowed_headers.is_empty() {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::list(self.allowed_headers.clone())
        };

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(self.allow_credentials)
    }
}
