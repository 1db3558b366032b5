//! Numeral recognition for display text.
//!
//! The display holds text rather than a number, so every transition reads
//! it back through [`parse_numeral`] and writes results with
//! [`number_to_display`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Decimal numerals as they can appear on the display.
    /// Allows: optional minus, digits with at most one point, optional exponent.
    static ref NUMERAL: Regex = Regex::new(
        r"^-?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
}

/// Parse display text as a finite number.
///
/// Returns `None` for anything that is not a plain decimal numeral,
/// including the error token, `inf` and `NaN`.
pub fn parse_numeral(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !NUMERAL.is_match(trimmed) {
        return None;
    }

    // "5." is a valid numeral while typing
    let digits = trimmed.strip_suffix('.').unwrap_or(trimmed);
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a number as display text.
///
/// Uses the shortest text that round-trips. Very large and very small
/// magnitudes switch to exponent form (`1e+21`, `1.5e-7`), and negative
/// zero is shown as `0`.
pub fn number_to_display(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}
