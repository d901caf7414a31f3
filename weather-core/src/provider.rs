use async_trait::async_trait;
use std::fmt::Debug;

use crate::{config::Units, error::FetchError, model::WeatherReading};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current conditions. One call is one outbound request; no retries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str) -> Result<WeatherReading, FetchError>;

    /// Unit system readings come back in.
    fn units(&self) -> Units;
}
