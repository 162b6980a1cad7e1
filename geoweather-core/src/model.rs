use std::fmt;

use crate::error::InvalidCodeError;

/// A point on the globe, as reported by a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Result of resolving an IP address.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinates: Coordinates,
    pub country: String,
    pub region: String,
    pub city: String,
    pub postal_code: String,
}

/// Current conditions at a point.
///
/// `coordinates` is the point the weather provider echoed back, which may
/// differ in precision from the one that was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Degrees Celsius.
    pub temperature: i64,
    /// Meters per second.
    pub wind_speed: i64,
    pub weather_type: WeatherType,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherType {
    Clear,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherType {
    /// Classify a WMO weather code.
    ///
    /// Ranges are checked top-down and the first match wins, so 0 is clear and
    /// anything below 4 (negatives included) is cloudy. Codes of 100 and above
    /// are rejected.
    pub fn from_code(code: i64) -> Result<Self, InvalidCodeError> {
        match code {
            0 => Ok(Self::Clear),
            c if c < 4 => Ok(Self::Cloudy),
            c if c < 49 => Ok(Self::Fog),
            c if c < 58 => Ok(Self::Drizzle),
            c if c < 66 => Ok(Self::Rain),
            c if c < 78 => Ok(Self::Snow),
            c if c < 100 => Ok(Self::Thunderstorm),
            c => Err(InvalidCodeError(c)),
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Ясно",
            Self::Cloudy => "Облачно",
            Self::Fog => "Туман",
            Self::Drizzle => "Изморось",
            Self::Rain => "Дождь",
            Self::Snow => "Снег",
            Self::Thunderstorm => "Гроза",
        }
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Round to the nearest integer, ties to even (2.5 -> 2, 3.5 -> 4).
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
