use crate::comfort::bands::{mean, reading};
use crate::comfort::models::{CurrentConditions, HourlySeries};

/// Number of upcoming hours that decide how fast laundry dries
const DRYING_HORIZON: usize = 12;
const BASE_HOURS: f64 = 6.0;
const MIN_HOURS: f64 = 2.0;
const MAX_HOURS: f64 = 18.0;

/// Estimates how many hours clothes need to dry outdoors.
///
/// Starts from 6 hours and adjusts once each for the mean humidity and mean UV of the
/// next 12 hours and for the current temperature and wind. The result is kept within 2-18 hours.
/// Returns None if either the current conditions or the forecast is unknown.
///
/// # Arguments
///
/// * 'current' - current weather conditions
/// * 'hourly' - the hourly forecast
pub fn drying_time_hours(current: Option<&CurrentConditions>, hourly: Option<&HourlySeries>) -> Option<u8> {
    let (current, hourly) = (current?, hourly?);

    let horizon = &hourly.samples()[..hourly.len().min(DRYING_HORIZON)];
    let mean_humidity = mean(horizon.iter().filter_map(|s| s.humidity));
    let mean_uv = mean(horizon.iter().map(|s| reading(s.uv_index))).unwrap_or(0.0);

    let hours = BASE_HOURS
        + humidity_adjustment(mean_humidity)
        + temperature_adjustment(current.temperature)
        + wind_adjustment(current.wind_speed)
        + uv_adjustment(mean_uv);

    Some(hours.clamp(MIN_HOURS, MAX_HOURS).round() as u8)
}

fn humidity_adjustment(humidity: Option<f64>) -> f64 {
    match humidity {
        Some(h) if h >= 80.0 => 4.0,
        Some(h) if h >= 60.0 => 2.0,
        Some(h) if h <= 40.0 => -1.0,
        _ => 0.0,
    }
}

fn temperature_adjustment(temperature: Option<f64>) -> f64 {
    match temperature {
        Some(t) if t >= 32.0 => -2.0,
        Some(t) if t >= 26.0 => -1.0,
        Some(t) if t <= 18.0 => 2.0,
        _ => 0.0,
    }
}

fn wind_adjustment(wind_speed: Option<f64>) -> f64 {
    match wind_speed {
        Some(w) if w >= 15.0 => -1.0,
        Some(w) if w <= 4.0 => 1.0,
        _ => 0.0,
    }
}

/// Stronger sun dries faster
fn uv_adjustment(uv: f64) -> f64 {
    if uv >= 6.0 {
        -1.5
    } else if uv >= 4.0 {
        -1.0
    } else if uv <= 2.0 {
        0.5
    } else {
        0.0
    }
}
