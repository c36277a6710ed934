use serde::Serialize;

/// Air quality category derived from the PM2.5 concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AirQualityLevel {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

/// Classifies PM2.5 (μg/m³) into an air quality level, upper bounds are inclusive
///
/// # Arguments
///
/// * 'pm2_5' - PM2.5 concentration, None if not measured
pub fn air_quality_level(pm2_5: Option<f64>) -> Option<AirQualityLevel> {
    let pm2_5 = pm2_5?;

    let level = if pm2_5 <= 12.0 {
        AirQualityLevel::Good
    } else if pm2_5 <= 35.4 {
        AirQualityLevel::Moderate
    } else if pm2_5 <= 55.4 {
        AirQualityLevel::UnhealthyForSensitiveGroups
    } else if pm2_5 <= 150.4 {
        AirQualityLevel::Unhealthy
    } else if pm2_5 <= 250.4 {
        AirQualityLevel::VeryUnhealthy
    } else {
        AirQualityLevel::Hazardous
    };

    Some(level)
}

/// Coarse weather condition derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Showers,
    Thunderstorm,
}

/// Maps a WMO weather code onto a weather condition
///
/// # Arguments
///
/// * 'code' - WMO weather code, None if not reported
pub fn weather_condition(code: Option<u8>) -> Option<WeatherCondition> {
    let condition = match code? {
        0 => WeatherCondition::Clear,
        1..=3 => WeatherCondition::Cloudy,
        4..=67 => WeatherCondition::Rain,
        68..=77 => WeatherCondition::Snow,
        78..=82 => WeatherCondition::Showers,
        _ => WeatherCondition::Thunderstorm,
    };

    Some(condition)
}
