/// Reading used in band checks, a missing measurement counts as 0
pub fn reading(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Inclusive range check
pub fn within(value: f64, from: f64, to: f64) -> bool {
    value >= from && value <= to
}

/// Arithmetic mean, None for no values
pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reading_is_zero() {
        assert_eq!(reading(None), 0.0);
        assert_eq!(reading(Some(42.5)), 42.5);
    }

    #[test]
    fn within_is_inclusive() {
        assert!(within(18.0, 18.0, 26.0));
        assert!(within(26.0, 18.0, 26.0));
        assert!(!within(26.1, 18.0, 26.0));
        assert!(!within(0.0, 18.0, 26.0));
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean([].into_iter()), None);
        assert_eq!(mean([2.0, 4.0, 9.0].into_iter()), Some(5.0));
    }
}
