//! The single GET-and-decode path shared by every provider client.

use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::FetchError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("geoweather/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct JsonFetcher {
    http: Client,
}

impl JsonFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Every request gives up after `timeout`, including reading the body.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http })
    }

    /// GET `url` once and hand the body to `parse`.
    ///
    /// Transport failures and non-2xx statuses are reported as the caller's
    /// own error type via `From<FetchError>`.
    pub async fn fetch<T, E>(&self, url: Url, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<T, E>
    where
        E: From<FetchError>,
    {
        let body = self.get_text(url).await?;
        parse(&body)
    }

    async fn get_text(&self, url: Url) -> Result<String, FetchError> {
        tracing::debug!(%url, "sending request");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
