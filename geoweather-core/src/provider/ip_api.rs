use async_trait::async_trait;
use serde::Deserialize;
use url::{Url, form_urlencoded};

use crate::{
    error::{FetchError, GeolocationError},
    http::JsonFetcher,
    model::{Coordinates, Location},
};

use super::GeolocationResolver;

/// Geolocation through the ip-api.com JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpApiResolver {
    http: JsonFetcher,
    base_url: String,
    lang: Option<String>,
}

impl IpApiResolver {
    pub fn new(http: JsonFetcher, base_url: String, lang: Option<String>) -> Self {
        Self { http, base_url, lang }
    }
}

#[async_trait]
impl GeolocationResolver for IpApiResolver {
    async fn resolve(&self, ip: Option<&str>) -> Result<Location, GeolocationError> {
        let url = geolocation_url(&self.base_url, ip.unwrap_or_default(), self.lang.as_deref())
            .map_err(FetchError::from)?;

        self.http.fetch(url, parse_geolocation).await.inspect_err(|err| {
            tracing::warn!(error = %err, "geolocation lookup failed");
        })
    }
}

/// `{base}{ip}?lang={lang}`; the IP is form-encoded and the query is only
/// added when a language is set.
pub fn geolocation_url(base: &str, ip: &str, lang: Option<&str>) -> Result<Url, url::ParseError> {
    let ip: String = form_urlencoded::byte_serialize(ip.as_bytes()).collect();
    let mut url = Url::parse(&format!("{base}{ip}"))?;

    if let Some(lang) = lang.filter(|l| !l.is_empty()) {
        url.query_pairs_mut().append_pair("lang", lang);
    }

    Ok(url)
}

#[derive(Debug, Deserialize)]
struct IpApiStatus {
    status: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    lat: f64,
    lon: f64,
    country: String,
    #[serde(rename = "regionName")]
    region_name: String,
    city: String,
    zip: String,
}

/// Parse an ip-api body. Every field is required.
pub fn parse_geolocation(body: &str) -> Result<Location, GeolocationError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let status = IpApiStatus::deserialize(&value)?;
    if status.status.as_deref() == Some("fail") {
        return Err(GeolocationError::Rejected(
            status.message.unwrap_or_else(|| "unknown reason".to_string()),
        ));
    }

    let parsed = IpApiResponse::deserialize(value)?;

    Ok(Location {
        coordinates: Coordinates::new(parsed.lat, parsed.lon),
        country: parsed.country,
        region: parsed.region_name,
        city: parsed.city,
        postal_code: parsed.zip,
    })
}
