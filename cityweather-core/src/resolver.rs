use crate::{error::LookupError, model::Coordinate, provider::WeatherProvider};

/// Only the best geocoding match is ever used.
pub const GEOCODE_LIMIT: u8 = 1;

/// Resolve a place name to the coordinate of its first geocoding match.
///
/// `Ok(None)` means the service found nothing; callers treat that as a
/// silent no-op rather than an error.
pub async fn resolve(
    provider: &dyn WeatherProvider,
    query: &str,
) -> Result<Option<Coordinate>, LookupError> {
    let matches = provider.geocode(query, GEOCODE_LIMIT).await?;

    let Some(first) = matches.first() else {
        tracing::info!(query, "no geocoding match");
        return Ok(None);
    };

    let coord = first.coordinate();
    tracing::debug!(query, lat = coord.latitude, lon = coord.longitude, "resolved location");
    Ok(Some(coord))
}
