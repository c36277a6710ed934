use crate::comfort::bands::{reading, within};
use crate::comfort::models::{Activity, ActivityScore, AirQuality, CurrentConditions};
use crate::comfort::scorer::{clamp_score, comfort_score};

/// Scores every outdoor activity (0-100) for the current conditions.
/// The comfort score, lowered by an air quality penalty, is the base that each
/// activity adjusts with its own set of weather rules.
///
/// Returns an empty list if either the conditions or the air quality is unknown.
///
/// # Arguments
///
/// * 'current' - current weather conditions
/// * 'air_quality' - current air quality readings
pub fn activity_scores(
    current: Option<&CurrentConditions>,
    air_quality: Option<&AirQuality>,
) -> Vec<ActivityScore> {
    let (Some(current), Some(air_quality)) = (current, air_quality) else {
        return Vec::new();
    };

    let pm2_5 = air_quality.pm2_5_or_zero();
    let comfort = comfort_score(current.temperature, current.humidity) as f64;
    let base = (comfort - air_penalty(pm2_5)).max(0.0);

    Activity::ALL
        .iter()
        .map(|&activity| ActivityScore {
            activity,
            score: clamp_score(base + modifier(activity, current, pm2_5)),
        })
        .collect()
}

/// Penalty for particulate pollution
///
/// # Arguments
///
/// * 'pm2_5' - PM2.5 concentration in μg/m³
fn air_penalty(pm2_5: f64) -> f64 {
    if pm2_5 <= 35.0 {
        0.0
    } else if pm2_5 <= 55.0 {
        10.0
    } else if pm2_5 <= 150.0 {
        25.0
    } else {
        40.0
    }
}

/// Sum of the activity specific bonuses and penalties.
/// Missing measurements are read as 0, so they fail every range but pass every ceiling.
fn modifier(activity: Activity, current: &CurrentConditions, pm2_5: f64) -> f64 {
    let temp = reading(current.temperature);
    let humidity = reading(current.humidity);
    let wind = reading(current.wind_speed);
    let uv = reading(current.uv_index);

    match activity {
        Activity::Running => {
            either(within(temp, 18.0, 26.0), 5.0, -10.0)
                + either(humidity <= 70.0, 5.0, -5.0)
                + either(within(wind, 5.0, 20.0), 5.0, 0.0)
                - uv_penalty(uv, 10.0, 5.0)
        }
        Activity::Cycling => {
            let wind_bonus = if within(wind, 3.0, 20.0) {
                5.0
            } else if wind > 25.0 {
                -10.0
            } else {
                0.0
            };

            either(within(temp, 15.0, 28.0), 8.0, -8.0)
                + either(humidity <= 70.0, 5.0, -5.0)
                + wind_bonus
                - uv_penalty(uv, 10.0, 5.0)
        }
        Activity::Walking => {
            either(within(temp, 18.0, 32.0), 8.0, -5.0)
                + either(humidity <= 75.0, 3.0, -3.0)
                - uv_penalty(uv, 8.0, 4.0)
        }
        Activity::OutdoorStudy => {
            either(within(temp, 20.0, 30.0), 10.0, -10.0)
                + either(humidity <= 65.0, 5.0, -5.0)
                - either(pm2_5 > 55.0, 10.0, 0.0)
                - either(uv > 7.0, 8.0, 0.0)
        }
        Activity::OutdoorSports => {
            either(within(temp, 18.0, 30.0), 8.0, -8.0)
                + either(wind <= 25.0, 3.0, -5.0)
                - uv_penalty(uv, 10.0, 5.0)
        }
        Activity::Photography => {
            either(within(reading(current.cloud_cover), 20.0, 80.0), 8.0, 0.0)
                + either((3.0..=7.0).contains(&uv), 5.0, 0.0)
        }
    }
}

/// Penalty for UV above 8 (severe) or within (6, 8] (moderate)
fn uv_penalty(uv: f64, severe: f64, moderate: f64) -> f64 {
    if uv > 8.0 {
        severe
    } else if uv > 6.0 {
        moderate
    } else {
        0.0
    }
}

fn either(condition: bool, yes: f64, no: f64) -> f64 {
    if condition { yes } else { no }
}
