use crate::{
    Config,
    model::{CurrentConditions, ForecastSample},
    source::openweather::OpenWeatherSource,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A weather data source: answers the two independent questions a search
/// asks, current conditions and the forecast sample series. Implementations
/// hand back already-decoded domain values; callers never see wire formats.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> anyhow::Result<CurrentConditions>;

    /// Forecast samples in ascending timestamp order, several days ahead.
    async fn forecast(&self, city: &str) -> anyhow::Result<Vec<ForecastSample>>;
}

/// Construct the OpenWeatherMap source from config.
pub fn source_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherSource>> {
    let api_key = config.require_api_key()?;

    Ok(Box::new(OpenWeatherSource::new(api_key.to_owned(), config.language.clone())))
}
