// Reduces raw field text to digits and at most one decimal separator.
use crate::config::FormatSettings;
use shared::models::SanitizedValue;

/// Strips everything but ASCII digits and the decimal separator. The leftmost
/// separator is kept and every later one is dropped. Fractional digits beyond
/// `max_fraction_digits` are truncated. Total over any input.
pub fn sanitize(text: &str, settings: &FormatSettings) -> SanitizedValue {
    let mut out = String::with_capacity(text.len());
    let mut seen_separator = false;
    let mut fraction_len = 0usize;

    for c in text.chars() {
        if c.is_ascii_digit() {
            if seen_separator {
                if fraction_len == settings.max_fraction_digits {
                    continue;
                }
                fraction_len += 1;
            }
            out.push(c);
        } else if c == settings.decimal_separator && !seen_separator {
            seen_separator = true;
            out.push(c);
        }
    }

    SanitizedValue::new_unchecked(out)
}
