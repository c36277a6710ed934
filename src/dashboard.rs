use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::comfort::activity::activity_scores;
use crate::comfort::classify::{air_quality_level, weather_condition, AirQualityLevel, WeatherCondition};
use crate::comfort::drying::drying_time_hours;
use crate::comfort::hourly::{best_hours, comfort_series, focus_window};
use crate::comfort::indoor::indoor_comfort;
use crate::comfort::models::{
    ActivityScore, AirQuality, CurrentConditions, FocusWindow, HourComfort, HourlySeries,
    IndoorComfort, Suggestion,
};
use crate::perceived_temperature::feels_like;

/// Latest known data for one city, parts stay None until first fetched
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    pub current: Option<CurrentConditions>,
    pub hourly: Option<HourlySeries>,
    pub air_quality: Option<AirQuality>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct Dashboard {
    pub city: String,
    pub updated: Option<DateTime<Utc>>,
    pub current: Option<CurrentConditions>,
    pub feels_like: Option<f64>,
    pub condition: Option<WeatherCondition>,
    pub air_quality: Option<AirQuality>,
    pub air_quality_level: Option<AirQualityLevel>,
    pub indoor_comfort: IndoorComfort,
    pub activities: Vec<ActivityScore>,
    pub hourly: Vec<HourComfort>,
    pub suggestions: Vec<Suggestion>,
    pub focus_window: Option<FocusWindow>,
    pub drying_time_hours: Option<u8>,
}

impl Dashboard {
    /// Runs every scorer on the snapshot of a city
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city
    /// * 'snapshot' - latest known data for the city
    pub fn new(city: &str, snapshot: &Snapshot) -> Self {
        let current = snapshot.current.as_ref();
        let hourly = snapshot.hourly.as_ref();
        let air_quality = snapshot.air_quality.as_ref();

        Dashboard {
            city: city.to_string(),
            updated: snapshot.updated,
            current: snapshot.current,
            feels_like: current.and_then(feels_like),
            condition: weather_condition(current.and_then(|c| c.weather_code)),
            air_quality: snapshot.air_quality,
            air_quality_level: air_quality_level(air_quality.and_then(|a| a.pm2_5)),
            indoor_comfort: indoor_comfort(current),
            activities: activity_scores(current, air_quality),
            hourly: hourly.map(comfort_series).unwrap_or_default(),
            suggestions: hourly.map(best_hours).unwrap_or_default(),
            focus_window: hourly.and_then(focus_window),
            drying_time_hours: drying_time_hours(current, hourly),
        }
    }
}
