const IDEAL_TEMPERATURE: f64 = 24.0;
const IDEAL_HUMIDITY: f64 = 50.0;
const MAX_PENALTY: f64 = 40.0;

/// Score used whenever temperature or humidity is unknown
pub const NEUTRAL_SCORE: u8 = 50;

/// Calculates a comfort score (0-100) as the distance from an ideal climate of 24 °C and 50% RH.
/// Temperature and humidity penalties are capped individually at 40 points each.
///
/// # Arguments
///
/// * 'temperature' - temperature in Celsius
/// * 'humidity' - relative humidity in percentage
pub fn comfort_score(temperature: Option<f64>, humidity: Option<f64>) -> u8 {
    match (temperature, humidity) {
        (Some(temp), Some(hum)) => {
            let temp_penalty = MAX_PENALTY.min((temp - IDEAL_TEMPERATURE).abs() * 3.0);
            let hum_penalty = MAX_PENALTY.min((hum - IDEAL_HUMIDITY).abs() * 1.2);

            clamp_score(100.0 - temp_penalty - hum_penalty)
        }
        _ => NEUTRAL_SCORE,
    }
}

/// Rounds a raw score and clamps it into 0-100.
/// NaN input ends up as 0.
///
/// # Arguments
///
/// * 'raw' - unbounded score
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ideal_point_is_perfect() {
        assert_eq!(comfort_score(Some(24.0), Some(50.0)), 100);
    }

    #[test]
    fn missing_input_is_neutral() {
        assert_eq!(comfort_score(None, Some(50.0)), 50);
        assert_eq!(comfort_score(Some(24.0), None), 50);
        assert_eq!(comfort_score(None, None), 50);
    }

    #[test]
    fn penalties_combine() {
        // 30 °C -> 18, 70% -> 24
        assert_eq!(comfort_score(Some(30.0), Some(70.0)), 58);
    }

    #[test]
    fn single_extreme_factor_is_capped() {
        assert_eq!(comfort_score(Some(50.0), Some(50.0)), 60);
        assert_eq!(comfort_score(Some(24.0), Some(100.0)), 60);
    }

    #[test]
    fn both_extreme_factors_bottom_out() {
        assert_eq!(comfort_score(Some(-10.0), Some(100.0)), 20);
        assert_eq!(comfort_score(Some(50.0), Some(0.0)), 20);
    }

    #[test]
    fn raw_scores_are_clamped() {
        assert_eq!(clamp_score(-12.4), 0);
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(57.5), 58);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn nonsense_values_still_score() {
        assert_eq!(comfort_score(Some(24.0), Some(-20.0)), 60);
    }

    proptest! {
        #[test]
        fn score_is_in_range(t in -100.0f64..100.0, h in -50.0f64..150.0) {
            let score = comfort_score(Some(t), Some(h));
            prop_assert!(score <= 100);
        }

        #[test]
        fn score_is_symmetric_around_ideal_temperature(d in -60i32..60, h in 0i32..100) {
            let d = d as f64;
            let h = Some(h as f64);
            prop_assert_eq!(comfort_score(Some(24.0 + d), h), comfort_score(Some(24.0 - d), h));
        }

        #[test]
        fn score_is_idempotent(t in -40.0f64..50.0, h in 0.0f64..100.0) {
            prop_assert_eq!(comfort_score(Some(t), Some(h)), comfort_score(Some(t), Some(h)));
        }
    }
}
