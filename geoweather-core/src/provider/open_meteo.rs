use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::{
    error::{FetchError, WeatherServiceError},
    http::JsonFetcher,
    model::{Coordinates, WeatherReading, WeatherType, round_half_even},
};

use super::WeatherService;

/// Current weather through the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: JsonFetcher,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(http: JsonFetcher, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl WeatherService for OpenMeteoClient {
    async fn get_weather(&self, coordinates: Coordinates) -> Result<WeatherReading, WeatherServiceError> {
        let url = weather_url(&self.base_url, coordinates).map_err(FetchError::from)?;

        self.http.fetch(url, parse_weather).await.inspect_err(|err| {
            tracing::warn!(error = %err, "weather lookup failed");
        })
    }
}

/// Current-weather-only request with wind speed in m/s. Coordinates are
/// written at full precision.
pub fn weather_url(base: &str, coordinates: Coordinates) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        base,
        &[
            ("latitude", coordinates.latitude.to_string()),
            ("longitude", coordinates.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("windspeed_unit", "ms".to_string()),
        ],
    )
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i64,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    latitude: f64,
    longitude: f64,
    current_weather: OmCurrentWeather,
}

/// Parse an Open-Meteo body into a reading.
///
/// The reading's coordinates come from the provider's own echo, not from the
/// request.
pub fn parse_weather(body: &str) -> Result<WeatherReading, WeatherServiceError> {
    let parsed: OmResponse = serde_json::from_str(body)?;
    let current = parsed.current_weather;

    Ok(WeatherReading {
        temperature: round_half_even(current.temperature),
        wind_speed: round_half_even(current.windspeed),
        weather_type: WeatherType::from_code(current.weathercode)?,
        coordinates: Coordinates::new(parsed.latitude, parsed.longitude),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.open-meteo.com/v1/forecast";

    const BODY: &str = r#"{
        "latitude": 59.898617,
        "longitude": 30.26538,
        "generationtime_ms": 0.26798248291015625,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 4.0,
        "current_weather": {
            "temperature": -1.8,
            "windspeed": 10.8,
            "winddirection": 111.0,
            "weathercode": 3,
            "time": "2022-11-29T10:00"
        }
    }"#;

    fn expected_reading() -> WeatherReading {
        WeatherReading {
            temperature: -2,
            wind_speed: 11,
            weather_type: WeatherType::Cloudy,
            coordinates: Coordinates::new(59.898617, 30.26538),
        }
    }

    #[test]
    fn url_carries_all_parameters() {
        let url = weather_url(BASE, Coordinates::new(59.898617, 30.26538)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.open-meteo.com/v1/forecast?latitude=59.898617&longitude=30.26538&current_weather=true&windspeed_unit=ms"
        );
    }

    #[test]
    fn url_keeps_negative_and_precise_coordinates() {
        let url = weather_url(BASE, Coordinates::new(-33.8688197, 151.2092955)).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(pairs[0], ("latitude".to_string(), "-33.8688197".to_string()));
        assert_eq!(pairs[1], ("longitude".to_string(), "151.2092955".to_string()));
    }

    #[test]
    fn parses_fixture() {
        assert_eq!(parse_weather(BODY).unwrap(), expected_reading());
    }

    #[test]
    fn parsing_is_deterministic() {
        let first = parse_weather(BODY).unwrap();
        for _ in 0..5 {
            assert_eq!(parse_weather(BODY).unwrap(), first);
        }
    }

    #[test]
    fn coordinates_come_from_provider_echo() {
        let body = BODY
            .replace("\"latitude\": 59.898617", "\"latitude\": 59.9")
            .replace("\"longitude\": 30.26538", "\"longitude\": 30.3");
        let reading = parse_weather(&body).unwrap();
        assert_eq!(reading.coordinates, Coordinates::new(59.9, 30.3));
    }

    #[test]
    fn half_values_round_to_even() {
        let body = BODY
            .replace("-1.8", "2.5")
            .replace("10.8", "3.5");
        let reading = parse_weather(&body).unwrap();
        assert_eq!(reading.temperature, 2);
        assert_eq!(reading.wind_speed, 4);
    }

    #[test]
    fn empty_object_is_an_error() {
        let err = parse_weather("{}").unwrap_err();
        assert!(matches!(err, WeatherServiceError::Parse(_)));
    }

    #[test]
    fn missing_nested_field_is_an_error() {
        let body = BODY.replace("\"weathercode\": 3,", "");
        let err = parse_weather(&body).unwrap_err();
        assert!(matches!(err, WeatherServiceError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_weather(&BODY[..60]).unwrap_err();
        assert!(matches!(err, WeatherServiceError::Parse(_)));
    }

    #[test]
    fn fractional_code_is_a_parse_error() {
        let body = BODY.replace("\"weathercode\": 3", "\"weathercode\": 3.0");
        let err = parse_weather(&body).unwrap_err();
        assert!(matches!(err, WeatherServiceError::Parse(_)));
    }

    #[test]
    fn unknown_code_is_a_weather_error() {
        let body = BODY.replace("\"weathercode\": 3", "\"weathercode\": 100");
        let err = parse_weather(&body).unwrap_err();
        assert!(matches!(err, WeatherServiceError::UnknownCode(e) if e.0 == 100));
    }
}
