use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One entry of a geocoding response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeMatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl GeocodeMatch {
    /// Missing latitude or longitude count as `0.0`.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat.unwrap_or(0.0), self.lon.unwrap_or(0.0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub code: Option<i32>,
    pub description: Option<String>,
}

/// A single point-in-time observation. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub wind_speed: Option<f64>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub coordinate: Option<Coordinate>,
    pub conditions: Vec<Condition>,
}

impl WeatherSnapshot {
    /// The entry used for display and asset selection.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.conditions.first()
    }
}
