// Renders sanitized text in display form: grouped integer part, untouched fraction.
use crate::config::FormatSettings;
use shared::models::{DisplayValue, SanitizedValue};

/// Applies thousands grouping to the integer part of `value`.
///
/// The input is expected to come from [`super::sanitize`]; the fraction is
/// still cut to `max_fraction_digits` so an over-long fraction never reaches
/// the display.
pub fn format(value: &SanitizedValue, settings: &FormatSettings) -> DisplayValue {
    let text = value.as_str();
    if text.is_empty() {
        return DisplayValue::new_unchecked(String::new());
    }

    let (integer, fraction) = match text.split_once(settings.decimal_separator) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    let mut out = group_integer(integer, settings.grouping_separator);
    if let Some(fraction) = fraction {
        out.push(settings.decimal_separator);
        out.extend(fraction.chars().take(settings.max_fraction_digits));
    }
    DisplayValue::new_unchecked(out)
}

// Inserts the separator before every complete run of three digits counted from the right.
fn group_integer(integer: &str, separator: char) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::sanitize;

    fn f(text: &str) -> String {
        format(&SanitizedValue::new_unchecked(text.to_string()), &FormatSettings::default()).as_str().to_string()
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(f("1234567"), "1,234,567");
        assert_eq!(f("999"), "999");
        assert_eq!(f("1000.5"), "1,000.5");
        assert_eq!(f("1000"), "1,000");
        assert_eq!(f("100000"), "100,000");
    }

    #[test]
    fn test_format_never_groups_fraction() {
        assert_eq!(f("1234.56"), "1,234.56");
        assert_eq!(f("0.12"), "0.12");
    }

    #[test]
    fn test_format_transient_states() {
        assert_eq!(f(""), "");
        assert_eq!(f("."), ".");
        assert_eq!(f("0."), "0.");
        assert_eq!(f("1234."), "1,234.");
        assert_eq!(f(".5"), ".5");
    }

    #[test]
    fn test_format_keeps_leading_zeros() {
        assert_eq!(f("0012"), "0,012");
    }

    #[test]
    fn test_format_caps_unsanitized_fraction() {
        assert_eq!(f("1.23456"), "1.23");
    }

    #[test]
    fn test_format_is_idempotent_through_sanitize() {
        let settings = FormatSettings::default();
        let inputs = [
            "", ".", "0", "12", "1234567.891", "1,2,3,4", "abc1.2.3def", "..5", "000123456", "9.",
        ];
        for raw in inputs {
            let once = format(&sanitize(raw, &settings), &settings);
            let twice = format(&sanitize(once.as_str(), &settings), &settings);
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_format_with_swapped_convention() {
        let settings = FormatSettings {
            grouping_separator: '.',
            decimal_separator: ',',
            ..FormatSettings::default()
        };
        let value = SanitizedValue::new_unchecked("1234567,8".to_string());
        assert_eq!(format(&value, &settings).as_str(), "1.234.567,8");
    }
}
