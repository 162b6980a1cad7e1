//! Core library for the `geoweather` CLI.
//!
//! This crate defines:
//! - Domain models (coordinates, location, weather reading) and the weather code classifier
//! - Geolocation and weather provider clients behind async traits
//! - The lookup pipeline: IP -> location -> weather
//! - Endpoint configuration
//!
//! It is used by `geoweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{FetchError, GeolocationError, InvalidCodeError, WeatherServiceError};
pub use lookup::{LookupError, Report, lookup};
pub use model::{Coordinates, Location, WeatherReading, WeatherType};
pub use provider::{GeolocationResolver, WeatherService, providers_from_config};
