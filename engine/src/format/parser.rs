// Converts display text back to a number, and numbers to fixed-point strings.
use crate::config::FormatSettings;
use crate::error::{FormatError, Result};

/// Removes grouping separators and parses the remainder as a plain decimal.
///
/// Only digits with at most one decimal separator are accepted, and at least
/// one digit must be present: `""` and a lone separator fail, as do signs,
/// exponents and `inf`/`nan`, which `f64::from_str` would otherwise take.
/// Digit strings too long for an `f64` fail instead of becoming infinite.
pub fn parse(display: &str, settings: &FormatSettings) -> Result<f64> {
    let (integer, fraction) = split_decimal(display, settings)?;
    let literal = match fraction {
        Some(fraction) => format!("{}.{}", integer, fraction),
        None => integer,
    };

    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormatError::MalformedNumericText(display.to_string())),
    }
}

/// Renders display text with exactly `digits` fractional digits, `.` as
/// decimal point and no grouping, e.g. `"1,234.5"` -> `"1234.50"`.
///
/// Works on the digits themselves, so integer parts of any length keep
/// every digit. Only a fraction longer than `digits` goes through `f64`
/// for rounding.
pub fn fixed_decimal(display: &str, digits: usize, settings: &FormatSettings) -> Result<String> {
    let (integer, fraction) = split_decimal(display, settings)?;
    let fraction = fraction.unwrap_or_default();
    if fraction.len() > digits {
        return Ok(to_fixed(parse(display, settings)?, digits));
    }

    let integer = integer.trim_start_matches('0');
    let mut out = if integer.is_empty() { "0".to_string() } else { integer.to_string() };
    if digits > 0 {
        out.push('.');
        out.push_str(&fraction);
        out.extend(std::iter::repeat('0').take(digits - fraction.len()));
    }
    Ok(out)
}

/// Renders `value` with exactly `digits` fractional digits, `.` as decimal
/// point and no grouping.
pub fn to_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

// Strips grouping and splits into integer and fraction digits. Rejects
// anything that is not a plain decimal literal with at least one digit.
fn split_decimal(display: &str, settings: &FormatSettings) -> Result<(String, Option<String>)> {
    let mut integer = String::with_capacity(display.len());
    let mut fraction: Option<String> = None;

    for c in display.chars() {
        if c == settings.grouping_separator {
            continue;
        }
        if c.is_ascii_digit() {
            match fraction.as_mut() {
                Some(fraction) => fraction.push(c),
                None => integer.push(c),
            }
        } else if c == settings.decimal_separator && fraction.is_none() {
            fraction = Some(String::new());
        } else {
            return Err(FormatError::MalformedNumericText(display.to_string()));
        }
    }

    let has_digit = !integer.is_empty() || fraction.as_deref().is_some_and(|f| !f.is_empty());
    if !has_digit {
        return Err(FormatError::MalformedNumericText(display.to_string()));
    }
    Ok((integer, fraction))
}
