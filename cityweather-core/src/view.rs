use serde::Serialize;

use crate::{
    assets::{BackgroundAsset, ForegroundAsset},
    format::{UNKNOWN, format_epoch_seconds, or_unknown},
    presenter::Presentation,
};

/// Display-ready strings for one rendered lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub city: String,
    pub description: String,
    pub temperature: String,
    pub feels_like: String,
    pub temp_min: String,
    pub temp_max: String,
    pub latitude: String,
    pub longitude: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
    pub sunrise: String,
    pub sunset: String,
    pub foreground: Option<ForegroundAsset>,
    pub background: Option<BackgroundAsset>,
}

impl WeatherView {
    pub fn new(city: &str, presentation: &Presentation) -> Self {
        Self::with_time_format(city, presentation, format_epoch_seconds)
    }

    pub(crate) fn with_time_format(
        city: &str,
        presentation: &Presentation,
        format_time: impl Fn(Option<i64>) -> String,
    ) -> Self {
        let s = &presentation.snapshot;
        let coord = s.coordinate;

        Self {
            city: city.to_string(),
            description: s
                .primary_condition()
                .and_then(|c| c.description.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            temperature: or_unknown(s.temperature, "° C"),
            feels_like: or_unknown(s.feels_like, "° C"),
            temp_min: or_unknown(s.temp_min, "° C"),
            temp_max: or_unknown(s.temp_max, "° C"),
            latitude: or_unknown(coord.map(|c| c.latitude), ""),
            longitude: or_unknown(coord.map(|c| c.longitude), ""),
            humidity: or_unknown(s.humidity_pct, "%"),
            pressure: or_unknown(s.pressure_hpa, " hPa"),
            wind_speed: or_unknown(s.wind_speed, " m/s"),
            sunrise: format_time(s.sunrise),
            sunset: format_time(s.sunset),
            foreground: presentation.assets.map(|a| a.foreground),
            background: presentation.assets.map(|a| a.background),
        }
    }
}
