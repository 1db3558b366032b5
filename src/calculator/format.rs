//! Display formatting.
//!
//! Turns raw display text into what is shown on screen: thousand
//! separators for normal values, exponent form for values that do not
//! fit the display.

use super::numeral::parse_numeral;
use super::state::ERROR_TOKEN;

/// Values above this magnitude are shown in exponent form.
const MAX_PLAIN_MAGNITUDE: f64 = 999_999_999.0;

/// Fraction digits shown in exponent form.
const EXPONENT_DIGITS: usize = 5;

/// Maximum fraction digits shown in plain form.
const MAX_FRACTION_DIGITS: usize = 8;

/// Enough digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Format display text for the screen.
///
/// The error token is passed through and unparseable text shows as `0`.
pub fn format_display(display: &str) -> String {
    if display == ERROR_TOKEN {
        return ERROR_TOKEN.to_string();
    }

    let Some(value) = parse_numeral(display) else {
        return "0".to_string();
    };

    if value.abs() > MAX_PLAIN_MAGNITUDE {
        format_exponent(value)
    } else {
        format_plain(value)
    }
}

/// Exponent form with a signed exponent, e.g. `1.23457e+12`.
fn format_exponent(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let mut mantissa = round_half_away(mantissa, EXPONENT_DIGITS);
    if mantissa.starts_with("10") {
        // 9.999995 rounded up to 10.00000
        mantissa = format!("1.{}", &mantissa[3..]);
        exponent += 1;
    }

    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}e{}{}", sign, mantissa, exponent_sign, exponent.abs())
}

/// Plain form with thousand separators and trimmed fraction digits.
fn format_plain(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let rounded = round_half_away(&exact, MAX_FRACTION_DIGITS);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    match trimmed.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
        }
        None => format!("{}{}", sign, group_thousands(trimmed)),
    }
}

/// Round an unsigned decimal numeral to `keep` fraction digits, with ties
/// going away from zero.
///
/// The input must carry the exact value; only the first dropped digit is
/// inspected.
fn round_half_away(numeral: &str, keep: usize) -> String {
    let (int_part, frac_part) = numeral.split_once('.').unwrap_or((numeral, ""));
    let round_up = frac_part.as_bytes().get(keep).is_some_and(|&d| d >= b'5');

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(keep))
        .collect();

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - keep);
    let mut result: String = int_digits.iter().map(|&d| char::from(d)).collect();
    if keep > 0 {
        result.push('.');
        result.extend(frac_digits.iter().map(|&d| char::from(d)));
    }
    result
}

/// Insert a comma between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_display("1000000"), "1,000,000");
        assert_eq!(format_display("999999999"), "999,999,999");
        assert_eq!(format_display("-12345"), "-12,345");
        assert_eq!(format_display("123"), "123");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_display("1500000000"), "1.50000e+9");
        assert_eq!(format_display("1234567890123"), "1.23457e+12");
        assert_eq!(format_display("-1000000000"), "-1.00000e+9");
        assert_eq!(format_display("1e+21"), "1.00000e+21");
        assert_eq!(format_display("9999999999999"), "1.00000e+13");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // 1/512 and 1234565 * 10^6 are exact ties at the last shown digit
        assert_eq!(format_display("0.001953125"), "0.00195313");
        assert_eq!(format_display("-0.001953125"), "-0.00195313");
        assert_eq!(format_display("1234565000000"), "1.23457e+12");
        assert_eq!(format_display("0.125"), "0.125");
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away("2.5", 0), "3");
        assert_eq!(round_half_away("0.4999", 0), "0");
        assert_eq!(round_half_away("9.995", 2), "10.00");
        assert_eq!(round_half_away("1.2", 3), "1.200");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(format_display("0.30000000000000004"), "0.3");
        assert_eq!(format_display("1234.5"), "1,234.5");
        assert_eq!(format_display("0.123456789"), "0.12345679");
        assert_eq!(format_display("2.50"), "2.5");
    }

    #[test]
    fn test_in_progress_text() {
        assert_eq!(format_display("0"), "0");
        assert_eq!(format_display("12."), "12");
        assert_eq!(format_display("0."), "0");
    }

    #[test]
    fn test_error_and_garbage() {
        assert_eq!(format_display("Error"), "Error");
        assert_eq!(format_display("abc"), "0");
        assert_eq!(format_display(""), "0");
    }

    #[test]
    fn test_same_value_same_text() {
        assert_eq!(format_display("1500"), format_display("1500.000"));
        assert_eq!(format_display("0.5"), format_display(".5"));
    }
}
