use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    config::{Config, Endpoints},
    error::{Endpoint, LookupError},
    model::{Condition, Coordinate, GeocodeMatch, WeatherSnapshot},
};

use super::WeatherProvider;

/// Unit system requested from the current-conditions endpoint.
pub const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    endpoints: Endpoints,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(api_key, Endpoints::default())
    }

    pub fn with_endpoints(api_key: String, endpoints: Endpoints) -> Self {
        Self {
            api_key,
            endpoints,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.require_api_key()?;
        Ok(Self::with_endpoints(api_key, config.endpoints.clone()))
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<String, LookupError> {
        tracing::debug!(%endpoint, url, "sending OpenWeather request");

        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| LookupError::transport(endpoint, e))?;

        read_body(endpoint, res).await
    }
}

async fn read_body(endpoint: Endpoint, res: Response) -> Result<String, LookupError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| LookupError::transport(endpoint, e))?;

    if !status.is_success() {
        return Err(LookupError::Remote {
            endpoint,
            code: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

fn parse<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::transport(endpoint, e))
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeocodeMatch>, LookupError> {
        let limit = limit.to_string();
        let body = self
            .send(
                Endpoint::Geocoding,
                &self.endpoints.geocoding,
                &[("q", query), ("limit", limit.as_str())],
            )
            .await?;

        // A `null` body is treated like an empty list.
        let matches: Option<Vec<GeocodeMatch>> = parse(Endpoint::Geocoding, &body)?;
        Ok(matches.unwrap_or_default())
    }

    async fn current_weather(&self, coord: Coordinate) -> Result<WeatherSnapshot, LookupError> {
        let lat = coord.latitude.to_string();
        let lon = coord.longitude.to_string();
        let body = self
            .send(
                Endpoint::Weather,
                &self.endpoints.weather,
                &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", UNITS)],
            )
            .await?;

        let parsed: OwCurrentResponse = parse(Endpoint::Weather, &body)?;
        Ok(parsed.into())
    }
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    #[serde(alias = "feelsLike")]
    feels_like: Option<f64>,
    #[serde(alias = "tempMin")]
    temp_min: Option<f64>,
    #[serde(alias = "tempMax")]
    temp_max: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: Option<i32>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: Option<OwMain>,
    coord: Option<OwCoord>,
    wind: Option<OwWind>,
    sys: Option<OwSys>,
    #[serde(default)]
    weather: Option<Vec<OwWeather>>,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(res: OwCurrentResponse) -> Self {
        let main = res.main.unwrap_or_default();
        let coordinate = res.coord.and_then(|c| Some(Coordinate::new(c.lat?, c.lon?)));

        let conditions = res
            .weather
            .unwrap_or_default()
            .into_iter()
            .map(|w| Condition {
                code: w.id,
                description: w.description,
            })
            .collect();

        WeatherSnapshot {
            temperature: main.temp,
            feels_like: main.feels_like,
            temp_min: main.temp_min,
            temp_max: main.temp_max,
            humidity_pct: main.humidity,
            pressure_hpa: main.pressure,
            wind_speed: res.wind.and_then(|w| w.speed),
            sunrise: res.sys.as_ref().and_then(|s| s.sunrise),
            sunset: res.sys.as_ref().and_then(|s| s.sunset),
            coordinate,
            conditions,
        }
    }
}
