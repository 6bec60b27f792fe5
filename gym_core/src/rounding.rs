//! Numeric input helpers: reading user-entered numbers and rounding weights.

/// Default rounding step for weights (half a kilo)
pub const DEFAULT_WEIGHT_STEP: f64 = 0.5;

/// Read a user-entered number
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
/// input yields `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Round half up, so -2.5 becomes -2 and 2.5 becomes 3
pub fn round_half_up(value: f64) -> f64 {
    // Adding 0.5 before flooring can itself round up just below a half
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round a value to the nearest multiple of `step`
///
/// Returns `None` (the "no value" marker) when there is no value or the
/// step is not a positive finite number.
pub fn round_to(value: Option<f64>, step: f64) -> Option<f64> {
    let value = value.filter(|v| v.is_finite())?;
    if !(step.is_finite() && step > 0.0) {
        return None;
    }
    Some(round_half_up(value / step) * step)
}

/// Parse and round a raw input string in one go
pub fn round_input(raw: &str, step: f64) -> Option<f64> {
    round_to(parse_number(raw), step)
}

/// Format a number the way it would be typed: `10` not `10.0`
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_half_steps() {
        assert_eq!(round_to(Some(10.26), 0.5), Some(10.5));
        assert_eq!(round_to(Some(10.24), 0.5), Some(10.0));
        assert_eq!(round_to(Some(10.25), 0.5), Some(10.5));
    }

    #[test]
    fn test_round_to_no_value() {
        assert_eq!(round_to(None, 0.5), None);
        assert_eq!(round_to(Some(f64::NAN), 0.5), None);
    }

    #[test]
    fn test_round_to_rejects_bad_step() {
        assert_eq!(round_to(Some(10.0), 0.0), None);
        assert_eq!(round_to(Some(10.0), -1.0), None);
    }

    #[test]
    fn test_round_to_other_steps() {
        assert_eq!(round_to(Some(41.3), 2.5), Some(42.5));
        assert_eq!(round_to(Some(7.4), 1.0), Some(7.0));
    }

    #[test]
    fn test_round_half_up_negative() {
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.5), 3.0);
    }

    #[test]
    fn test_round_just_below_half_stays_down() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_to(Some(0.24999999999999997), 0.5), Some(0.0));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42.5 "), Some(42.5));
        assert_eq!(parse_number("30"), Some(30.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("10,5"), None);
    }

    #[test]
    fn test_round_input_and_format() {
        let rounded = round_input("62.3", DEFAULT_WEIGHT_STEP).unwrap();
        assert_eq!(format_number(rounded), "62.5");
        assert_eq!(format_number(round_input("60.1", 0.5).unwrap()), "60");
        assert_eq!(round_input("", 0.5), None);
    }
}
