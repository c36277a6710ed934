use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// Maximum number of hourly samples considered by the engine
pub const SERIES_LENGTH: usize = 24;

/// Snapshot of the current weather conditions. Every field may be missing.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub precipitation: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub uv_index: Option<f64>,
    pub pressure: Option<f64>,
    pub weather_code: Option<u8>,
}

/// One hour of forecast, timestamp is local wall-clock time
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HourSample {
    pub timestamp: NaiveDateTime,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub uv_index: Option<f64>,
}

impl HourSample {
    /// Hour of day (0-23) of the sample
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// Chronologically ordered hourly forecast, never longer than 24 samples.
/// Index 0 is the current hour.
#[derive(Debug, Default, Clone, Serialize)]
pub struct HourlySeries(Vec<HourSample>);

impl HourlySeries {
    /// Creates a series from whatever the provider delivered, keeping the first 24 samples
    ///
    /// # Arguments
    ///
    /// * 'samples' - samples in chronological order
    pub fn new(mut samples: Vec<HourSample>) -> Self {
        samples.truncate(SERIES_LENGTH);
        HourlySeries(samples)
    }

    pub fn samples(&self) -> &[HourSample] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Current air quality readings, absent values count as 0 when scoring
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct AirQuality {
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub ozone: Option<f64>,
    pub carbon_monoxide: Option<f64>,
    pub dust: Option<f64>,
}

impl AirQuality {
    pub fn pm2_5_or_zero(&self) -> f64 {
        self.pm2_5.unwrap_or(0.0)
    }
}

/// The closed set of outdoor activities that gets scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Running,
    Cycling,
    Walking,
    OutdoorStudy,
    OutdoorSports,
    Photography,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Running,
        Activity::Cycling,
        Activity::Walking,
        Activity::OutdoorStudy,
        Activity::OutdoorSports,
        Activity::Photography,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Activity::Running => "Running",
            Activity::Cycling => "Cycling",
            Activity::Walking => "Walking",
            Activity::OutdoorStudy => "Outdoor Study",
            Activity::OutdoorSports => "Outdoor Sports",
            Activity::Photography => "Photography",
        }
    }
}

impl Serialize for Activity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityScore {
    pub activity: Activity,
    pub score: u8,
}

/// Result of the indoor comfort advisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndoorComfort {
    pub score: u8,
    pub recommendation: &'static str,
}

/// A comfort score attached to one hourly sample
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HourComfort {
    #[serde(flatten)]
    pub sample: HourSample,
    pub comfort: u8,
}

impl HourComfort {
    pub fn uv_or_zero(&self) -> f64 {
        self.sample.uv_index.unwrap_or(0.0)
    }
}

/// Best hour for some activity within the forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub label: &'static str,
    pub hour: String,
    pub comfort: u8,
}

/// The two dayparts competing for the focus window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Daypart {
    LateMorning,
    Afternoon,
}

impl Daypart {
    /// Inclusive hour-of-day bounds of the daypart
    pub fn hours(&self) -> (u32, u32) {
        match self {
            Daypart::LateMorning => (9, 12),
            Daypart::Afternoon => (14, 18),
        }
    }

    pub fn span(&self) -> &'static str {
        match self {
            Daypart::LateMorning => "09:00 - 12:00",
            Daypart::Afternoon => "14:00 - 18:00",
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        let (from, to) = self.hours();
        hour >= from && hour <= to
    }
}

/// Best daypart for focused work together with its mood prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusWindow {
    pub label: &'static str,
    pub daypart: Daypart,
    pub time: &'static str,
    pub comfort: u8,
    pub mood: u8,
    pub mood_prediction: &'static str,
}
