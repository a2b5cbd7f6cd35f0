//! Core library for the weather relay backend.
//!
//! This crate defines:
//! - Query models shared between the HTTP surface and the upstream clients
//! - Clients for the two upstream APIs (Open-Meteo forecast, Nominatim geocoding)
//! - The relay error type and its in-band envelope text
//!
//! It is used by `relay-server`, but can also be reused by other binaries or services.

pub mod model;
pub mod upstream;

pub use model::{ForecastQuery, ReverseQuery, SearchQuery};
pub use upstream::{Nominatim, OpenMeteo, RelayError};
