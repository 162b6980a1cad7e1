use geoweather_core::{Location, WeatherReading};

/// Multi-line summary printed on success.
pub fn format_weather(weather: &WeatherReading, location: &Location) -> String {
    let place = [
        location.city.as_str(),
        location.region.as_str(),
        location.country.as_str(),
        location.postal_code.as_str(),
    ]
    .join(", ");

    format!(
        "Место: {place}\n\
         Температура: {} °С\n\
         Ветер: {} м/с\n\
         Погода: {}",
        weather.temperature, weather.wind_speed, weather.weather_type
    )
}
