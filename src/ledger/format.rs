// Large-number formatter
//
// Grouped decimal strings with no scientific notation. Values past 2^53 are
// printed from their shortest round-trip digits padded with zeros, the way a
// browser's toLocaleString renders them, rather than the exact binary value.

/// Values at or above this are whole numbers in f64 and get expanded from
/// their shortest digits
const EXPAND_THRESHOLD: f64 = 1e16;

/// Fractional digits kept for small values
const MAX_FRACTION_DIGITS: usize = 3;

/// Format an integer with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_integer(1234567), "1,234,567");
/// assert_eq!(format_integer(42), "42");
/// ```
pub fn format_integer(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Insert a comma every three digits, counting from the right
pub fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Format any f64 as a grouped decimal string
///
/// # Examples
/// ```ignore
/// assert_eq!(format_large_number(324000.0), "324,000");
/// assert_eq!(format_large_number(1e21), "1,000,000,000,000,000,000,000");
/// assert_eq!(format_large_number(f64::INFINITY), "∞");
/// ```
pub fn format_large_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude.is_infinite() {
        return format!("{}∞", sign);
    }

    let (integer, fraction) = if magnitude >= EXPAND_THRESHOLD {
        (expand_shortest(magnitude), String::new())
    } else {
        split_fixed(magnitude)
    };

    if fraction.is_empty() {
        format!("{}{}", sign, group_digits(&integer))
    } else {
        format!("{}{}.{}", sign, group_digits(&integer), fraction)
    }
}

/// Fixed-point rendering with trailing fractional zeros trimmed
fn split_fixed(magnitude: f64) -> (String, String) {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, magnitude);
    match fixed.split_once('.') {
        Some((integer, fraction)) => (
            integer.to_string(),
            fraction.trim_end_matches('0').to_string(),
        ),
        None => (fixed, String::new()),
    }
}

/// Integer digits of a whole-number f64 from its shortest representation
fn expand_shortest(magnitude: f64) -> String {
    // "{:e}" gives e.g. "3.24e20" or "1.2345678901234567e300"
    let sci = format!("{:e}", magnitude);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{:.0}", magnitude);
    };
    let Ok(exponent) = exponent.parse::<usize>() else {
        return format!("{:.0}", magnitude);
    };

    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let integer_len = exponent + 1;
    if digits.len() < integer_len {
        digits.extend(std::iter::repeat('0').take(integer_len - digits.len()));
    } else {
        digits.truncate(integer_len);
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(42), "42");
        assert_eq!(format_integer(1000), "1,000");
        assert_eq!(format_integer(324_000), "324,000");
        assert_eq!(format_integer(1_234_567), "1,234,567");
        assert_eq!(format_integer(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(format_large_number(0.0), "0");
        assert_eq!(format_large_number(999.0), "999");
        assert_eq!(format_large_number(324_000.0), "324,000");
        assert_eq!(format_large_number(31_428_000.0), "31,428,000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_large_number(162_000.5), "162,000.5");
        assert_eq!(format_large_number(1234.56789), "1,234.568");
        assert_eq!(format_large_number(0.25), "0.25");
    }

    #[test]
    fn test_doubling_amounts_stay_exact() {
        // 324000 × 2^40 is exactly representable
        let amount = 324_000.0 * 2f64.powi(40);
        assert_eq!(format_large_number(amount), "356,241,767,399,424,000");
    }

    #[test]
    fn test_huge_values_have_no_exponent() {
        let s = format_large_number(1e21);
        assert_eq!(s, "1,000,000,000,000,000,000,000");

        let s = format_large_number(1e300);
        assert!(!s.contains('e'));
        assert!(s.starts_with("1,000,000"));
        let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
        assert_eq!(digits, 301);
    }

    #[test]
    fn test_shortest_digits_are_kept() {
        assert_eq!(format_large_number(3.24e20), "324,000,000,000,000,000,000");
        assert_eq!(format_large_number(1.5e16), "15,000,000,000,000,000");
    }

    #[test]
    fn test_non_finite_and_negative() {
        assert_eq!(format_large_number(f64::INFINITY), "∞");
        assert_eq!(format_large_number(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_large_number(f64::NAN), "NaN");
        assert_eq!(format_large_number(-1234.0), "-1,234");
    }
}
