//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The daily forecast aggregator
//! - The weather data source abstraction and its OpenWeatherMap implementation
//! - Shared domain models (current conditions, forecast samples, day summaries)
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod config;
pub mod model;
pub mod source;

pub use aggregate::{DEFAULT_HORIZON, aggregate};
pub use config::Config;
pub use model::{CurrentConditions, DaySummary, ForecastSample, SampleError};
pub use source::WeatherSource;
