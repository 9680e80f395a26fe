use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::LookupError,
    model::{Coordinate, GeocodeMatch, WeatherSnapshot},
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Remote service answering geocoding and current-conditions queries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up at most `limit` places matching `query`, best match first.
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeocodeMatch>, LookupError>;

    /// Current conditions at `coord`, in metric units.
    async fn current_weather(&self, coord: Coordinate) -> Result<WeatherSnapshot, LookupError>;
}
