use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config, Coordinates, GeolocationError, Location, WeatherReading, WeatherServiceError,
    error::FetchError,
    http::JsonFetcher,
    provider::{ip_api::IpApiResolver, open_meteo::OpenMeteoClient},
};

pub mod ip_api;
pub mod open_meteo;

/// Turns an IP address into a location.
#[async_trait]
pub trait GeolocationResolver: Send + Sync + Debug {
    /// `None` (or an empty string) resolves the caller's own public address.
    async fn resolve(&self, ip: Option<&str>) -> Result<Location, GeolocationError>;
}

/// Current weather at a set of coordinates.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    async fn get_weather(&self, coordinates: Coordinates) -> Result<WeatherReading, WeatherServiceError>;
}

/// Construct both providers from config, sharing one HTTP client.
pub fn providers_from_config(
    config: &Config,
) -> Result<(Box<dyn GeolocationResolver>, Box<dyn WeatherService>), FetchError> {
    let fetcher = JsonFetcher::new()?;

    let resolver = IpApiResolver::new(
        fetcher.clone(),
        config.ip_api_url.clone(),
        config.ip_api_lang.clone(),
    );
    let weather = OpenMeteoClient::new(fetcher, config.weather_api_url.clone());

    Ok((Box::new(resolver), Box::new(weather)))
}
