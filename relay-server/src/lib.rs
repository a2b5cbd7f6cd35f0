//! Router, CORS policy and handlers for the weather relay server.
//!
//! Split out of the binary so integration tests can build the router against
//! mock upstreams.

pub mod app;
pub mod cors;
pub mod handlers;

pub use app::{AppState, router};
pub use cors::CorsOptions;
