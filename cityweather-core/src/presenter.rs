use chrono::{Local, Timelike};

use crate::{
    assets::{AssetSelection, select_assets},
    error::LookupError,
    model::{Coordinate, WeatherSnapshot},
    provider::WeatherProvider,
};

/// A fetched snapshot together with the assets chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub snapshot: WeatherSnapshot,
    /// `None` when the first condition entry is missing or carries no code.
    pub assets: Option<AssetSelection>,
}

/// Current local hour of day (0-23).
pub fn local_hour() -> u32 {
    Local::now().hour()
}

pub async fn present(
    provider: &dyn WeatherProvider,
    coord: Coordinate,
) -> Result<Presentation, LookupError> {
    present_with_clock(provider, coord, local_hour).await
}

/// Like [`present`], reading the hour from `hour_of_day` once the response has arrived.
pub async fn present_with_clock(
    provider: &dyn WeatherProvider,
    coord: Coordinate,
    hour_of_day: impl FnOnce() -> u32,
) -> Result<Presentation, LookupError> {
    let snapshot = provider.current_weather(coord).await?;

    let assets = snapshot.primary_condition().and_then(|condition| {
        let code = condition.code?;
        let hour = hour_of_day();
        tracing::debug!(
            code,
            hour,
            description = condition.description.as_deref().unwrap_or_default(),
            "selecting weather assets"
        );
        Some(select_assets(code, hour))
    });

    Ok(Presentation { snapshot, assets })
}
