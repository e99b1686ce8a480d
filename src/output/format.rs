//! Number formatting
//!
//! The exercises print floating-point values the way a default-configured
//! C++ output stream does (`%g` with six significant digits), so `15.0`
//! prints as `15` and `256.0 / 3.0` as `85.3333`.

/// Significant digits used by [`format_general`]
pub const PRECISION: usize = 6;

/// Format a float with [`PRECISION`] significant digits, dropping trailing
/// zeros, switching to scientific notation for very small or large magnitudes.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first: rounding can bump the exponent
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Format a sequence of values, each followed by a single space
pub fn format_spaced<T, F>(values: &[T], fmt: F) -> String
where
    F: Fn(&T) -> String,
{
    values.iter().map(|v| format!("{} ", fmt(v))).collect()
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_drop_fraction() {
        assert_eq!(format_general(15.0), "15");
        assert_eq!(format_general(-1.0), "-1");
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(5.0), "5");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(format_general(253.0 / 3.0), "84.3333");
        assert_eq!(format_general(275.0 / 3.0), "91.6667");
        assert_eq!(format_general(3.14159 * 16.0), "50.2654");
        assert_eq!(format_general(2.25), "2.25");
        assert_eq!(format_general(-4.5), "-4.5");
    }

    #[test]
    fn test_scientific_bounds() {
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(999999.7), "1e+06");
    }

    #[test]
    fn test_format_spaced_keeps_trailing_space() {
        assert_eq!(format_spaced(&[1, 2, 3], |v| v.to_string()), "1 2 3 ");
        assert_eq!(format_spaced::<i32, _>(&[], |v| v.to_string()), "");
    }
}
