// Caret re-anchoring after the field text is rewritten.
//
// Grouping separators move as digits are added or removed, so a caret that was
// valid in the raw text can point somewhere else in the formatted text. This is
// a heuristic: it keeps the caret next to the digit being edited in the common
// cases and is always in bounds, but it is not a general diff. Deleting a digit
// that makes two separators vanish at once can leave it one position off.
//
// All offsets are in characters, not bytes.
use crate::config::FormatSettings;

/// Computes where the caret should go in `post_text` given its position in
/// `pre_text`.
///
/// Deletions shift the caret left by the number of grouping separators that
/// disappeared before it (comparing both texts up to the same index). Every
/// other edit shifts it by the change in total length. The result is clamped
/// to `0..=len(post_text)`.
pub fn reconcile_caret(
    pre_text: &str,
    post_text: &str,
    caret_before: usize,
    is_deleting: bool,
    settings: &FormatSettings,
) -> usize {
    let separator = settings.grouping_separator;
    let caret = caret_before as i64;
    let post_len = post_text.chars().count() as i64;

    let moved = if is_deleting {
        let before = separators_before(pre_text, caret_before, separator) as i64;
        let after = separators_before(post_text, caret_before, separator) as i64;
        caret - (before - after)
    } else {
        let pre_len = pre_text.chars().count() as i64;
        caret + (post_len - pre_len)
    };

    moved.clamp(0, post_len) as usize
}

fn separators_before(text: &str, caret: usize, separator: char) -> usize {
    text.chars().take(caret).filter(|&c| c == separator).count()
}
