use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use serde_with::{serde_as, TimestampSeconds};
use crate::comfort::models::{AirQuality, CurrentConditions, HourSample, HourlySeries};

#[derive(Deserialize)]
pub struct CurrentData {
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub precipitation: Option<f64>,
    pub weather_code: Option<u8>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub uv_index: Option<f64>,
}

#[serde_as]
#[derive(Deserialize)]
pub struct HourlyData {
    #[serde_as(as = "Vec<TimestampSeconds<i64>>")]
    pub time: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
    #[serde(default)]
    pub uv_index: Vec<Option<f64>>,
}

#[derive(Deserialize)]
pub struct FullForecast {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub current: Option<CurrentData>,
    pub hourly: Option<HourlyData>,
}

#[derive(Deserialize)]
pub struct CurrentAirQuality {
    pub pm10: Option<f64>,
    pub pm2_5: Option<f64>,
    pub carbon_monoxide: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub ozone: Option<f64>,
    pub dust: Option<f64>,
}

#[derive(Deserialize)]
pub struct FullAirQuality {
    pub current: Option<CurrentAirQuality>,
}

impl From<CurrentData> for CurrentConditions {
    fn from(c: CurrentData) -> Self {
        CurrentConditions {
            temperature: c.temperature_2m,
            apparent_temperature: c.apparent_temperature,
            humidity: c.relative_humidity_2m,
            precipitation: c.precipitation,
            wind_speed: c.wind_speed_10m,
            wind_direction: c.wind_direction_10m,
            cloud_cover: c.cloud_cover,
            uv_index: c.uv_index,
            pressure: c.pressure_msl,
            weather_code: c.weather_code,
        }
    }
}

impl From<CurrentAirQuality> for AirQuality {
    fn from(a: CurrentAirQuality) -> Self {
        AirQuality {
            pm2_5: a.pm2_5,
            pm10: a.pm10,
            nitrogen_dioxide: a.nitrogen_dioxide,
            ozone: a.ozone,
            carbon_monoxide: a.carbon_monoxide,
            dust: a.dust,
        }
    }
}

impl HourlyData {
    /// Zips the parallel hourly arrays into samples in local wall-clock time.
    /// Arrays shorter than `time` leave the missing values as None.
    ///
    /// # Arguments
    ///
    /// * 'offset' - the location's offset from UTC
    pub fn into_series(self, offset: FixedOffset) -> HourlySeries {
        let value = |values: &[Option<f64>], idx: usize| values.get(idx).copied().flatten();

        let samples = self.time
            .iter()
            .enumerate()
            .map(|(idx, time)| HourSample {
                timestamp: time.with_timezone(&offset).naive_local(),
                temperature: value(&self.temperature_2m, idx),
                humidity: value(&self.relative_humidity_2m, idx),
                precipitation_probability: value(&self.precipitation_probability, idx),
                uv_index: value(&self.uv_index, idx),
            })
            .collect();

        HourlySeries::new(samples)
    }
}
