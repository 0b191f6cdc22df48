/// Display value of a cell whose formula failed or sits on a cycle.
pub const ERROR_VALUE: &str = "ERROR";

/// Format a computed number for display.
///
/// Uses the shortest decimal that round-trips (`15`, `0.5`,
/// `0.30000000000000004`); negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_finite() {
        n.to_string()
    } else {
        ERROR_VALUE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::NAN), ERROR_VALUE);
    }
}
