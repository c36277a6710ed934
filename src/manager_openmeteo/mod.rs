pub mod errors;
mod models;

use std::time::Duration;
use chrono::FixedOffset;
use reqwest::Client;
use crate::comfort::models::{AirQuality, CurrentConditions, HourlySeries};
use crate::initialization::OpenMeteoConfig;
use crate::manager_openmeteo::errors::OpenMeteoError;
use crate::manager_openmeteo::models::{FullAirQuality, FullForecast};

const CURRENT_PARAMS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m,wind_direction_10m,cloud_cover,pressure_msl,uv_index";
const HOURLY_PARAMS: &str = "temperature_2m,relative_humidity_2m,precipitation_probability,uv_index";
const AIR_QUALITY_PARAMS: &str = "pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,ozone,dust";

/// Current conditions and the hourly forecast for one location
pub struct Forecast {
    pub current: Option<CurrentConditions>,
    pub hourly: Option<HourlySeries>,
}

/// Struct for fetching weather forecasts and air quality from Open-Meteo
pub struct OpenMeteo {
    client: Client,
    forecast_url: String,
    air_quality_url: String,
    timezone: String,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching forecasts and air quality
    ///
    /// # Arguments
    ///
    /// * 'config' - provider urls, timezone and request timeout
    pub fn new(config: &OpenMeteoConfig) -> Result<OpenMeteo, OpenMeteoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            forecast_url: config.forecast_url.clone(),
            air_quality_url: config.air_quality_url.clone(),
            timezone: config.timezone.clone(),
        })
    }

    /// Retrieves current conditions and a one day hourly forecast for the given location.
    /// The hourly timestamps are converted to the location's local time and the series is
    /// cut to the first 24 hours.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub async fn forecast(&self, lat: f64, long: f64) -> Result<Forecast, OpenMeteoError> {
        let url = format!("{}?latitude={:0.4}&longitude={:0.4}&current={}&hourly={}&timezone={}&forecast_days=1&timeformat=unixtime",
                          self.forecast_url, lat, long, CURRENT_PARAMS, HOURLY_PARAMS, self.timezone);

        let json = self.get(&url).await?;
        let full: FullForecast = serde_json::from_str(&json)?;

        let offset = FixedOffset::east_opt(full.utc_offset_seconds)
            .ok_or_else(|| OpenMeteoError::Document(format!("invalid utc offset: {}", full.utc_offset_seconds)))?;

        Ok(Forecast {
            current: full.current.map(CurrentConditions::from),
            hourly: full.hourly.map(|h| h.into_series(offset)),
        })
    }

    /// Retrieves the current air quality readings for the given location
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub async fn air_quality(&self, lat: f64, long: f64) -> Result<Option<AirQuality>, OpenMeteoError> {
        let url = format!("{}?latitude={:0.4}&longitude={:0.4}&current={}&timezone={}",
                          self.air_quality_url, lat, long, AIR_QUALITY_PARAMS, self.timezone);

        let json = self.get(&url).await?;
        let full: FullAirQuality = serde_json::from_str(&json)?;

        Ok(full.current.map(AirQuality::from))
    }

    async fn get(&self, url: &str) -> Result<String, OpenMeteoError> {
        let req = self.client
            .get(url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OpenMeteoError::Http(format!("Error while fetching from Open-Meteo: {}", status)));
        }

        Ok(req.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> OpenMeteoConfig {
        OpenMeteoConfig {
            forecast_url: format!("{}/v1/forecast", server.uri()),
            air_quality_url: format!("{}/v1/air-quality", server.uri()),
            timezone: "Asia/Kolkata".to_string(),
            request_timeout_secs: 5,
        }
    }

    fn forecast_body(hours: usize) -> String {
        // 2025-06-01T00:00:00Z, local time is UTC+5:30
        let start = 1_748_736_000i64;
        let time: Vec<i64> = (0..hours as i64).map(|i| start + i * 3600).collect();
        let temps: Vec<Option<f64>> = (0..hours).map(|i| if i == 1 { None } else { Some(20.0 + i as f64) }).collect();

        serde_json::json!({
            "latitude": 28.625,
            "longitude": 77.25,
            "utc_offset_seconds": 19800,
            "timezone": "Asia/Kolkata",
            "current": {
                "time": start,
                "interval": 900,
                "temperature_2m": 31.2,
                "relative_humidity_2m": 48,
                "apparent_temperature": 33.0,
                "precipitation": 0.0,
                "weather_code": 2,
                "wind_speed_10m": 9.4,
                "wind_direction_10m": 280,
                "cloud_cover": 40,
                "pressure_msl": 1004.1,
                "uv_index": 6.5
            },
            "hourly": {
                "time": time,
                "temperature_2m": temps,
                "relative_humidity_2m": vec![55; hours],
                "precipitation_probability": vec![10; hours]
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn fetches_forecast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "28.6139"))
            .and(query_param("timeformat", "unixtime"))
            .respond_with(ResponseTemplate::new(200).set_body_string(forecast_body(30)))
            .mount(&server)
            .await;

        let open_meteo = OpenMeteo::new(&config(&server)).unwrap();
        let forecast = open_meteo.forecast(28.6139, 77.2090).await.unwrap();

        let current = forecast.current.unwrap();
        assert_eq!(current.temperature, Some(31.2));
        assert_eq!(current.humidity, Some(48.0));
        assert_eq!(current.weather_code, Some(2));
        assert_eq!(current.uv_index, Some(6.5));

        let hourly = forecast.hourly.unwrap();
        assert_eq!(hourly.len(), 24);
        let first = hourly.samples()[0];
        assert_eq!(first.timestamp.hour(), 5);
        assert_eq!(first.timestamp.minute(), 30);
        assert_eq!(first.temperature, Some(20.0));
        assert_eq!(hourly.samples()[1].temperature, None);
        assert_eq!(first.humidity, Some(55.0));
        assert_eq!(first.uv_index, None);
    }

    #[tokio::test]
    async fn forecast_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let open_meteo = OpenMeteo::new(&config(&server)).unwrap();
        let result = open_meteo.forecast(28.6139, 77.2090).await;
        assert!(matches!(result, Err(OpenMeteoError::Http(_))));
    }

    #[tokio::test]
    async fn forecast_malformed_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
            .mount(&server)
            .await;

        let open_meteo = OpenMeteo::new(&config(&server)).unwrap();
        let result = open_meteo.forecast(28.6139, 77.2090).await;
        assert!(matches!(result, Err(OpenMeteoError::Document(_))));
    }

    #[tokio::test]
    async fn fetches_air_quality() {
        let server = MockServer::start().await;
        let body = r#"{
            "latitude": 28.6,
            "longitude": 77.2,
            "current": {
                "time": "2025-06-01T10:00",
                "interval": 3600,
                "pm10": 120.4,
                "pm2_5": 64.2,
                "carbon_monoxide": 510.0,
                "nitrogen_dioxide": 30.1,
                "ozone": null,
                "dust": 12.0
            }
        }"#;
        Mock::given(method("GET"))
            .and(path("/v1/air-quality"))
            .and(query_param("longitude", "77.2090"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let open_meteo = OpenMeteo::new(&config(&server)).unwrap();
        let air_quality = open_meteo.air_quality(28.6139, 77.2090).await.unwrap().unwrap();

        assert_eq!(air_quality.pm2_5, Some(64.2));
        assert_eq!(air_quality.pm10, Some(120.4));
        assert_eq!(air_quality.ozone, None);
    }

    #[tokio::test]
    async fn air_quality_without_current_block() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/air-quality"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"latitude": 28.6}"#))
            .mount(&server)
            .await;

        let open_meteo = OpenMeteo::new(&config(&server)).unwrap();
        assert!(open_meteo.air_quality(28.6139, 77.2090).await.unwrap().is_none());
    }
}
