use std::{env, fs};
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: String,
    pub log_level: String,
}

#[derive(Deserialize, Debug)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OpenMeteoConfig {
    pub forecast_url: String,
    pub air_quality_url: String,
    pub timezone: String,
    pub request_timeout_secs: u64,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            air_quality_url: "https://air-quality-api.open-meteo.com/v1/air-quality".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Refresh {
    pub interval_secs: u64,
}

impl Default for Refresh {
    fn default() -> Self {
        Self { interval_secs: 300 }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub general: General,
    pub web_server: WebServer,
    #[serde(default)]
    pub open_meteo: OpenMeteoConfig,
    #[serde(default)]
    pub refresh: Refresh,
    #[serde(default = "default_cities")]
    pub cities: Vec<City>,
}

/// Loads the configuration and sets up logging.
///
/// The config file path is taken from the first command line argument, then from the
/// CONFIG_PATH environment variable and lastly defaults to 'config.toml'.
pub fn config() -> Result<Config, ConfigError> {
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("CONFIG_PATH").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = parse_config(&fs::read_to_string(path)?)?;
    setup_logger(&config.general)?;

    Ok(config)
}

/// Parses and validates a toml configuration
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.cities.is_empty() {
        return Err("no cities configured".into());
    }
    if config.refresh.interval_secs == 0 {
        return Err("refresh interval must be at least one second".into());
    }

    Ok(config)
}

fn default_cities() -> Vec<City> {
    [
        ("Delhi", 28.6139, 77.2090),
        ("Mumbai", 19.0760, 72.8777),
        ("Bangalore", 12.9716, 77.5946),
        ("Kolkata", 22.5726, 88.3639),
        ("Chennai", 13.0827, 80.2707),
        ("Hyderabad", 17.3850, 78.4867),
        ("Pune", 18.5204, 73.8567),
        ("Ahmedabad", 23.0225, 72.5714),
        ("Jaipur", 26.9124, 75.7873),
        ("Lucknow", 26.8467, 80.9462),
    ]
    .into_iter()
    .map(|(name, lat, long)| City { name: name.to_string(), lat, long })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [general]
        log_path = "comfortcast.log"
        log_level = "info"

        [web_server]
        bind_address = "127.0.0.1"
        bind_port = 8080
    "#;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = parse_config(MINIMAL).unwrap();

        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.refresh.interval_secs, 300);
        assert_eq!(config.open_meteo.timezone, "Asia/Kolkata");
        assert_eq!(config.open_meteo.forecast_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(config.cities.len(), 10);
        assert_eq!(config.cities[0].name, "Delhi");
    }

    #[test]
    fn explicit_sections_override_defaults() {
        let toml = format!(r#"{}
            [open_meteo]
            timezone = "Europe/Stockholm"

            [refresh]
            interval_secs = 60

            [[cities]]
            name = "Stockholm"
            lat = 59.3293
            long = 18.0686
        "#, MINIMAL);

        let config = parse_config(&toml).unwrap();
        assert_eq!(config.open_meteo.timezone, "Europe/Stockholm");
        assert_eq!(config.open_meteo.request_timeout_secs, 30);
        assert_eq!(config.refresh.interval_secs, 60);
        assert_eq!(config.cities.len(), 1);
        assert_eq!(config.cities[0].name, "Stockholm");
    }

    #[test]
    fn rejects_zero_interval() {
        let toml = format!("{}\n[refresh]\ninterval_secs = 0\n", MINIMAL);
        assert!(parse_config(&toml).is_err());
    }

    #[test]
    fn rejects_missing_sections() {
        assert!(parse_config("[general]\nlog_path = \"x.log\"\nlog_level = \"info\"\n").is_err());
    }
}
