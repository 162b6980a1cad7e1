use crate::{
    GeolocationError, Location, WeatherReading, WeatherServiceError,
    provider::{GeolocationResolver, WeatherService},
};

/// Everything needed to print a summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub location: Location,
    pub weather: WeatherReading,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    #[error(transparent)]
    Weather(#[from] WeatherServiceError),
}

/// Resolve `ip` (the caller's own address when `None`), then fetch the
/// weather at the resolved coordinates. The weather provider is not contacted
/// if geolocation fails.
pub async fn lookup(
    resolver: &dyn GeolocationResolver,
    weather: &dyn WeatherService,
    ip: Option<&str>,
) -> Result<Report, LookupError> {
    let location = resolver.resolve(ip).await?;
    tracing::debug!(city = %location.city, coordinates = ?location.coordinates, "resolved location");

    let weather = weather.get_weather(location.coordinates).await?;
    tracing::debug!(?weather, "fetched weather");

    Ok(Report { location, weather })
}
