//! Numeric string normalization
//!
//! Total functions used as the pre-filter for every fixed-format validator.
//! Invalid input maps to an empty string or `None`, never to a panic.

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.\-]+").expect("non-numeric run regex is valid"));

static SIGNED_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("signed decimal regex is valid"));

/// Fraction digits kept by [`format_number`] (en-US default).
const MAX_FRACTION_DIGITS: usize = 3;

/// Extract every ASCII digit from the stringified input, in order.
///
/// # Examples
/// ```
/// use irform_validation::extract_numeric;
/// assert_eq!(extract_numeric(Some("a1b2c3")), "123");
/// assert_eq!(extract_numeric(None::<&str>), "");
/// ```
pub fn extract_numeric<V: Display + ?Sized>(value: Option<&V>) -> String {
    value
        .map(|v| v.to_string().chars().filter(char::is_ascii_digit).collect())
        .unwrap_or_default()
}

/// Parse the first signed decimal found after dropping everything except
/// digits, `.` and `-`.
///
/// Returns `None` where a not-a-number result is expected.
pub fn parse_number<V: Display + ?Sized>(value: Option<&V>) -> Option<f64> {
    let raw = value?.to_string();
    let cleaned = NON_NUMERIC_RUN.replace_all(&raw, "");
    let token = SIGNED_DECIMAL.find(&cleaned)?;
    token.as_str().parse::<f64>().ok()
}

/// Replace every run of characters outside `[0-9.-]` with `separator`.
pub fn unify_separator<V: Display + ?Sized>(value: Option<&V>, separator: &str) -> String {
    value
        .map(|v| {
            NON_NUMERIC_RUN
                .replace_all(&v.to_string(), regex::NoExpand(separator))
                .into_owned()
        })
        .unwrap_or_default()
}

/// Format a number with digit grouping, using `separator` between groups.
///
/// Follows the en-US convention: groups of three, at most three fraction
/// digits rounded half away from zero, trailing fraction zeros dropped.
/// Digits come from the shortest decimal that round-trips the parsed
/// value, so `"1.0625"` gives `"1.063"` and 2^64 gives
/// `"18,446,744,073,709,552,000"`.
///
/// # Examples
/// ```
/// use irform_validation::format_number;
/// assert_eq!(format_number(Some(&1234567), ","), "1,234,567");
/// assert_eq!(format_number(Some("1.0625"), ","), "1.063");
/// assert_eq!(format_number(Some("abc"), ","), "");
/// ```
pub fn format_number<V: Display + ?Sized>(value: Option<&V>, separator: &str) -> String {
    let Some(number) = parse_number(value) else {
        return String::new();
    };
    let sign = if number.is_sign_negative() { "-" } else { "" };

    // overlong digit runs parse to infinity
    if number.is_infinite() {
        return format!("{}∞", sign);
    }

    let shortest = number.abs().to_string();
    let (int_part, frac_part) = round_fraction(&shortest, MAX_FRACTION_DIGITS);

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    out.push_str(sign);
    out.push_str(&group_thousands(&int_part, separator));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// Round a plain `int.frac` digit string to `digits` fraction digits, ties
/// away from zero. Returns the integer part and the fraction without
/// trailing zeros.
fn round_fraction(decimal: &str, digits: usize) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));

    if frac_part.len() <= digits {
        return (
            int_part.to_string(),
            frac_part.trim_end_matches('0').to_string(),
        );
    }

    let round_up = frac_part.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let int_part: String = kept[..split].iter().map(|&b| b as char).collect();
    let frac_part: String = kept[split..].iter().map(|&b| b as char).collect();
    (int_part, frac_part.trim_end_matches('0').to_string())
}

/// Insert `separator` between every group of three digits, counting from the
/// right. The input is expected to be a plain digit string.
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_extract_numeric() {
        assert_eq!(extract_numeric(Some("a1b2c3")), "123");
        assert_eq!(extract_numeric(Some("0912-345-6789")), "09123456789");
        assert_eq!(extract_numeric(Some("-12.5")), "125");
        assert_eq!(extract_numeric(Some(&42)), "42");
        assert_eq!(extract_numeric(Some("no digits")), "");
        assert_eq!(extract_numeric(None::<&str>), "");
    }

    #[test]
    fn test_extract_numeric_ignores_non_ascii_digits() {
        assert_eq!(extract_numeric(Some("۱۲۳4")), "4");
    }

    #[rstest]
    #[case("1,234.56", Some(1234.56))]
    #[case("  -42 ", Some(-42.0))]
    #[case("price: 3.5$", Some(3.5))]
    #[case("10-20", Some(10.0))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    fn test_parse_number(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_number(Some(input)), expected);
    }

    #[test]
    fn test_parse_number_absent() {
        assert_eq!(parse_number(None::<&str>), None);
        assert_eq!(parse_number(Some(&7)), Some(7.0));
    }

    #[test]
    fn test_unify_separator() {
        assert_eq!(unify_separator(Some("1 234 567"), ","), "1,234,567");
        assert_eq!(unify_separator(Some("12ab34--5"), "_"), "12_34--5");
        assert_eq!(unify_separator(Some("1  2"), "$1"), "1$12");
        assert_eq!(unify_separator(None::<&str>, ","), "");
    }

    #[rstest]
    #[case("1234567", ",", "1,234,567")]
    #[case("1234567", "٬", "1٬234٬567")]
    #[case("999", ",", "999")]
    #[case("1000", " ", "1 000")]
    #[case("-1234.5", ",", "-1,234.5")]
    #[case("0.12345", ",", "0.123")]
    #[case("12.000", ",", "12")]
    #[case("abc", ",", "")]
    #[case("1.0625", ",", "1.063")]
    #[case("-2.5555", ",", "-2.556")]
    #[case("0.9995", ",", "1")]
    #[case("999.9999", ",", "1,000")]
    #[case("0.0004", ",", "0")]
    #[case("18446744073709551616", ",", "18,446,744,073,709,552,000")]
    fn test_format_number(#[case] input: &str, #[case] separator: &str, #[case] expected: &str) {
        assert_eq!(format_number(Some(input), separator), expected);
    }

    #[test]
    fn test_format_number_from_integer() {
        assert_eq!(format_number(Some(&1234567), ","), "1,234,567");
        assert_eq!(format_number(None::<&str>, ","), "");
    }

    #[test]
    fn test_format_number_overlong_digits() {
        let digits = "9".repeat(400);
        assert_eq!(format_number(Some(digits.as_str()), ","), "∞");
        assert_eq!(format_number(Some(format!("-{}", digits).as_str()), ","), "-∞");
    }

    #[test]
    fn test_round_fraction() {
        assert_eq!(round_fraction("1.0625", 3), ("1".to_string(), "063".to_string()));
        assert_eq!(round_fraction("9.9995", 3), ("10".to_string(), String::new()));
        assert_eq!(round_fraction("12", 3), ("12".to_string(), String::new()));
        assert_eq!(round_fraction("0.120", 3), ("0".to_string(), "12".to_string()));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("", ","), "");
        assert_eq!(group_thousands("12", ","), "12");
        assert_eq!(group_thousands("123456", ","), "123,456");
        assert_eq!(group_thousands("1234567890", "."), "1.234.567.890");
    }

    proptest! {
        #[test]
        fn prop_extract_numeric_keeps_only_ascii_digits(s in "\\PC*") {
            let digits = extract_numeric(Some(s.as_str()));
            prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(digits.len(), s.chars().filter(char::is_ascii_digit).count());
        }

        #[test]
        fn prop_helpers_accept_any_text(s in ".*", separator in "\\PC{0,3}") {
            let _ = parse_number(Some(s.as_str()));
            let _ = unify_separator(Some(s.as_str()), &separator);
            let _ = format_number(Some(s.as_str()), &separator);
        }

        #[test]
        fn prop_helpers_accept_long_digit_runs(sign in "-?", digits in "[0-9]{0,400}", frac in "(\\.[0-9]{0,40})?") {
            let s = format!("{sign}{digits}{frac}");
            prop_assert!(extract_numeric(Some(s.as_str())).bytes().all(|b| b.is_ascii_digit()));
            let _ = parse_number(Some(s.as_str()));
            let _ = unify_separator(Some(s.as_str()), ",");
            let formatted = format_number(Some(s.as_str()), ",");
            prop_assert_eq!(formatted.is_empty(), !s.bytes().any(|b| b.is_ascii_digit()));
        }

        #[test]
        fn prop_format_number_keeps_at_most_three_fraction_digits(n in -1.0e12f64..1.0e12) {
            let formatted = format_number(Some(&n), ",");
            let fraction = formatted.split_once('.').map_or("", |(_, f)| f);
            prop_assert!(fraction.len() <= 3);
            prop_assert!(!fraction.ends_with('0'));
        }
    }
}
