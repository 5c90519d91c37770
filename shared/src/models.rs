// Value types passed between the formatter and whatever host owns the text field.
// None of these are long-lived: a host keeps the display text, everything else
// is derived per event.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digits plus at most one decimal separator, with the fractional part already
/// capped. Only the sanitizer constructs these from raw text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SanitizedValue(String);

impl SanitizedValue {
    /// Wraps text the caller has already reduced to sanitized form.
    pub fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sanitized value with grouping separators applied to its integer part.
/// This is what the field shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(String);

impl DisplayValue {
    pub fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Submission string: either empty ("no amount") or `D+.DD` with no grouping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendValue(String);

impl BackendValue {
    /// The "no amount entered" value.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackendValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of edit produced the raw text. Only deletions are treated
/// differently when re-anchoring the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    DeleteBackward,
    DeleteForward,
    Other,
}

impl EditKind {
    /// Maps a browser-style `inputType` string onto an edit kind.
    /// Anything that is not a content deletion counts as `Other`.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type {
            "deleteContentBackward" => EditKind::DeleteBackward,
            "deleteContentForward" => EditKind::DeleteForward,
            _ => EditKind::Other,
        }
    }

    pub fn is_deletion(self) -> bool {
        matches!(self, EditKind::DeleteBackward | EditKind::DeleteForward)
    }
}

/// One edit as delivered by the host: the field's raw text after the edit,
/// the caret (selection start, in characters) and the edit kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditContext {
    pub raw: String,
    pub caret: usize,
    pub kind: EditKind,
}

impl EditContext {
    pub fn new(raw: impl Into<String>, caret: usize, kind: EditKind) -> Self {
        Self {
            raw: raw.into(),
            caret,
            kind,
        }
    }
}
