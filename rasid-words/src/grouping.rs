//! Indian digit grouping
//!
//! Renders integers with the en-IN comma convention: the last three
//! digits form one group, the digits left of them are grouped in pairs
//! (1,23,456). No currency symbol is added here.

/// Format a possibly-missing numeric value with Indian digit grouping.
///
/// `None`, NaN and infinite values yield an empty string. Fractional
/// values are rounded to the nearest integer before grouping.
///
/// # Examples
///
/// ```
/// use rasid_words::format_digits;
///
/// assert_eq!(format_digits(Some(1000.0)), "1,000");
/// assert_eq!(format_digits(Some(100000.0)), "1,00,000");
/// assert_eq!(format_digits(None), "");
/// assert_eq!(format_digits(Some(f64::NAN)), "");
/// ```
pub fn format_digits(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_digits_i64(v.round() as i64),
        _ => String::new(),
    }
}

/// Integer fast path for [`format_digits`].
///
/// Negative values keep a leading sign; grouping applies to the
/// absolute value.
pub fn format_digits_i64(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();

    let mut grouped = String::with_capacity(len + len / 2 + 1);
    if n < 0 {
        grouped.push('-');
    }

    if len <= 3 {
        grouped.push_str(&digits);
        return grouped;
    }

    // Head is grouped in pairs, the final three digits stay together.
    let (head, tail) = digits.split_at(len - 3);
    let first = if head.len() % 2 == 1 { 1 } else { 2 };
    grouped.push_str(&head[..first]);
    let mut idx = first;
    while idx < head.len() {
        grouped.push(',');
        grouped.push_str(&head[idx..idx + 2]);
        idx += 2;
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_yields_empty() {
        assert_eq!(format_digits(None), "");
        assert_eq!(format_digits(Some(f64::NAN)), "");
        assert_eq!(format_digits(Some(f64::INFINITY)), "");
        assert_eq!(format_digits(Some(f64::NEG_INFINITY)), "");
    }

    #[test]
    fn test_small_values_have_no_separator() {
        assert_eq!(format_digits(Some(0.0)), "0");
        assert_eq!(format_digits(Some(7.0)), "7");
        assert_eq!(format_digits(Some(999.0)), "999");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_digits(Some(1000.0)), "1,000");
        assert_eq!(format_digits(Some(100000.0)), "1,00,000");
        assert_eq!(format_digits(Some(210000.0)), "2,10,000");
        assert_eq!(format_digits(Some(1234567.0)), "12,34,567");
        assert_eq!(format_digits(Some(123456789.0)), "12,34,56,789");
    }

    #[test]
    fn test_fraction_rounds_to_nearest() {
        assert_eq!(format_digits(Some(999.6)), "1,000");
        assert_eq!(format_digits(Some(1000.4)), "1,000");
    }

    #[test]
    fn test_negative_keeps_sign() {
        assert_eq!(format_digits(Some(-1234567.0)), "-12,34,567");
        assert_eq!(format_digits_i64(-999), "-999");
    }

    #[test]
    fn test_integer_fast_path_matches_float_path() {
        for n in [0i64, 5, 99, 100, 1_000, 99_999, 1_00_000, 12_34_567, 98_76_54_321] {
            assert_eq!(format_digits(Some(n as f64)), format_digits_i64(n));
        }
    }
}
