use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    config::Endpoints,
    error::Result,
    fetch::JsonFetcher,
    model::{Forecast, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city`.
    async fn current(&self, city: &str) -> Result<WeatherSnapshot>;

    /// The provider's multi-day time series for `city`, in provider order.
    async fn forecast(&self, city: &str) -> Result<Forecast>;
}

/// Construct the provider the `wth` command talks to.
pub fn provider_from_config(
    api_key: String,
    endpoints: &Endpoints,
    fetcher: JsonFetcher,
) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(api_key, endpoints, fetcher))
}
