use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_IP_API_URL: &str = "http://ip-api.com/json/";
pub const DEFAULT_IP_API_LANG: &str = "ru";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Provider endpoints, optionally stored on disk.
///
/// Example TOML:
/// ip_api_url = "http://ip-api.com/json/"
/// ip_api_lang = "ru"
/// weather_api_url = "https://api.open-meteo.com/v1/forecast"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Geolocation base URL; the IP is appended directly to it.
    pub ip_api_url: String,

    /// Language for geolocation names. An empty string lets the provider choose.
    pub ip_api_lang: Option<String>,

    pub weather_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_api_url: DEFAULT_IP_API_URL.to_string(),
            ip_api_lang: Some(DEFAULT_IP_API_LANG.to_string()),
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "geoweather", "geoweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = Config::from_toml_str("").expect("empty config must parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.ip_api_lang.as_deref(), Some("ru"));
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let cfg = Config::from_toml_str(r#"ip_api_lang = "en""#).expect("config must parse");

        assert_eq!(cfg.ip_api_lang.as_deref(), Some("en"));
        assert_eq!(cfg.ip_api_url, DEFAULT_IP_API_URL);
        assert_eq!(cfg.weather_api_url, DEFAULT_WEATHER_API_URL);
    }

    #[test]
    fn full_document_roundtrips() {
        let cfg = Config {
            ip_api_url: "http://localhost:8080/json/".to_string(),
            ip_api_lang: None,
            weather_api_url: "http://localhost:8081/v1/forecast".to_string(),
        };

        let toml = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed = Config::from_toml_str(&toml).expect("parse");

        assert_eq!(parsed.ip_api_url, cfg.ip_api_url);
        assert_eq!(parsed.weather_api_url, cfg.weather_api_url);
    }

    #[test]
    fn empty_lang_is_kept() {
        let cfg = Config::from_toml_str(r#"ip_api_lang = """#).expect("config must parse");
        assert_eq!(cfg.ip_api_lang.as_deref(), Some(""));
    }

    #[test]
    fn invalid_document_is_an_error() {
        let err = Config::from_toml_str("ip_api_url = 42").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
