use reqwest::StatusCode;

/// Failure to get a usable response body from a provider.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid request URL")]
    Url(#[from] url::ParseError),

    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Any failure while turning an IP address into a [`Location`](crate::Location).
#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    #[error("geolocation request failed")]
    Request(#[from] FetchError),

    #[error("geolocation response could not be parsed")]
    Parse(#[from] serde_json::Error),

    #[error("geolocation provider rejected the query: {0}")]
    Rejected(String),
}

/// Any failure while fetching weather for a set of coordinates.
#[derive(Debug, thiserror::Error)]
pub enum WeatherServiceError {
    #[error("weather request failed")]
    Request(#[from] FetchError),

    #[error("weather response could not be parsed")]
    Parse(#[from] serde_json::Error),

    #[error("weather response carried an unusable weather code")]
    UnknownCode(#[from] InvalidCodeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized weather code {0}")]
pub struct InvalidCodeError(pub i64);
