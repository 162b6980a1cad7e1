use clap::Parser;
use geoweather_core::{Config, LookupError, lookup, providers_from_config};
use std::process::ExitCode;

use crate::output::format_weather;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "geoweather",
    version,
    about = "Show the current weather at your location, detected from your public IP"
)]
pub struct Cli {
    /// IP address to locate instead of your own.
    pub ip: Option<String>,
}

impl Cli {
    pub async fn run(self) -> ExitCode {
        match self.execute().await {
            Ok(summary) => {
                println!("{summary}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::debug!(error = ?err, "lookup failed");
                println!("{}", failure_message(&err));
                ExitCode::FAILURE
            }
        }
    }

    async fn execute(&self) -> anyhow::Result<String> {
        let config = Config::load()?;
        let (resolver, weather) = providers_from_config(&config)?;

        let report = lookup(resolver.as_ref(), weather.as_ref(), self.ip.as_deref()).await?;

        Ok(format_weather(&report.weather, &report.location))
    }
}

/// One short line per failing stage.
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LookupError>() {
        Some(LookupError::Geolocation(_)) => "Can't get geolocation.".to_string(),
        Some(LookupError::Weather(_)) => "Can't get weather.".to_string(),
        None => format!("Error: {err:#}"),
    }
}
