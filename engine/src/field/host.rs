// Capability interface a UI toolkit implements to bind a text input.
//
// The coordinator is the only code that talks to a host; the formatting
// algorithms take and return plain values.

/// A single-line text input that the formatter can read and rewrite.
///
/// Carets are character offsets into `text()`.
pub trait FieldHost {
    /// Field name; the carrier field is addressed by deriving from it.
    fn name(&self) -> &str;

    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    /// Selection start.
    fn caret(&self) -> usize;

    fn set_caret(&mut self, caret: usize);

    /// Returns the carrier field called `name` in this input's container,
    /// creating it first if it does not exist. Never creates a second one.
    fn ensure_carrier(&mut self, name: &str) -> &mut dyn CarrierField;
}

/// Hidden field that carries the backend value to the server.
pub trait CarrierField {
    fn value(&self) -> &str;

    fn set_value(&mut self, value: &str);
}
