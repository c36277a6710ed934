use crate::comfort::models::CurrentConditions;

/// Returns the "feels like" temperature in Celsius for the current conditions.
///
/// The provider's apparent temperature is used when reported, otherwise it is derived from
/// temperature, humidity and wind. None if neither is possible.
///
/// # Arguments
///
/// * 'current' - current weather conditions
pub fn feels_like(current: &CurrentConditions) -> Option<f64> {
    if current.apparent_temperature.is_some() {
        return current.apparent_temperature;
    }

    match (current.temperature, current.humidity, current.wind_speed) {
        (Some(t), Some(h), Some(w)) => Some(perceived_temperature(t, h, w)),
        _ => None,
    }
}

/// Calculates the perceived temperature in Celsius using wind chill in cold and windy
/// weather and the heat index otherwise.
///
/// # Arguments
///
/// * 'temp' - temperature in Celsius
/// * 'humidity' - humidity in percentage
/// * 'wind_speed' - wind speed in km/h
pub fn perceived_temperature(temp: f64, humidity: f64, wind_speed: f64) -> f64 {
    let temp = celsius_to_fahrenheit(temp);
    let mph = kmh_to_mph(wind_speed);

    if temp <= 50.0 && mph > 3.0 {
        fahrenheit_to_celsius(wind_chill(temp, mph))
    } else {
        fahrenheit_to_celsius(heat_index(temp, humidity))
    }
}

/// Wind chill in Fahrenheit.
/// https://www.weather.gov/safety/cold-wind-chill-chart
///
/// # Arguments
///
/// * 'temp' - temperature in Fahrenheit
/// * 'wind_speed' - wind speed in miles per hour
fn wind_chill(temp: f64, wind_speed: f64) -> f64 {
    let v = wind_speed.powf(0.16);
    35.74 + 0.6215 * temp - 35.75 * v + 0.4275 * temp * v
}

/// Heat index in Fahrenheit, the Rothfusz regression with NOAA's adjustments.
/// https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml
///
/// # Arguments
///
/// * 'temp' - temperature in Fahrenheit
/// * 'humidity' - humidity in percentage
fn heat_index(temp: f64, humidity: f64) -> f64 {
    let simple = 0.5 * (temp + 61.0 + ((temp - 68.0) * 1.2) + (humidity * 0.094));
    if simple < 80.0 {
        return simple;
    }

    let (t, rh) = (temp, humidity);
    let mut index = -42.379 + 2.04901523 * t + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh;

    if rh < 13.0 && (80.0..=112.0).contains(&t) {
        index -= ((13.0 - rh) / 4.0) * ((17.0 - (t - 95.0).abs()) / 17.0).sqrt();
    } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
        index += ((rh - 85.0) / 10.0) * ((87.0 - t) / 5.0);
    }

    index
}

fn celsius_to_fahrenheit(temp: f64) -> f64 {
    temp * 1.8 + 32.0
}

/// Converts to Celsius rounded to one decimal
fn fahrenheit_to_celsius(temp: f64) -> f64 {
    ((temp - 32.0) / 1.8 * 10.0).round() / 10.0
}

fn kmh_to_mph(kmh: f64) -> f64 {
    kmh / 1.609344
}
