//! Core library for the `wth` weather command.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The JSON fetcher and the OpenWeather provider
//! - IP-based location lookup
//! - Forecast aggregation and colour-coded report rendering
//! - Shell environment setup used by `wth-setup`
//!
//! It is used by `wth-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fetch;
pub mod forecast;
pub mod format;
pub mod geo;
pub mod model;
pub mod provider;
pub mod report;
pub mod setup;

pub use config::{API_KEY_VAR, Endpoints};
pub use error::WthError;
pub use fetch::JsonFetcher;
pub use geo::Geolocator;
pub use model::{Forecast, ForecastPoint, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use report::{ReportMode, Reporter};
