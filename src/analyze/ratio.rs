pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Division for count denominators: a zero count divides by 1, so the numerator passes through.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        numerator
    } else {
        numerator / denominator
    }
}

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_PER_HOUR
}

/// One-decimal rounding, ties to even.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(3.0, 2.0), 1.5);
        assert_eq!(safe_div(3.0, 0.0), 3.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
        assert_eq!(safe_div(-2.0, -0.0), -2.0);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(1.25), 1.25);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_seconds_to_hours() {
        assert_eq!(seconds_to_hours(3600.0), 1.0);
        assert_eq!(seconds_to_hours(1800.0), 0.5);
        assert_eq!(seconds_to_hours(0.0), 0.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(1.04), 1.0);
        assert_eq!(round_to_tenth(1.06), 1.1);
        assert_eq!(round_to_tenth(0.25), 0.2);
        assert_eq!(round_to_tenth(0.1 + 0.2), 0.3);
        assert_eq!(round_to_tenth(seconds_to_hours(5400.0)), 1.5);
    }
}
