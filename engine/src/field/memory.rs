// In-memory field host, used by tests and the replay binary.
use super::host::{CarrierField, FieldHost};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCarrier {
    value: String,
}

impl CarrierField for MemoryCarrier {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// A text input with its enclosing container. Carriers live in the container,
/// keyed by name, so there is at most one per name.
#[derive(Debug, Clone, Default)]
pub struct MemoryField {
    name: String,
    text: String,
    caret: usize,
    carriers: BTreeMap<String, MemoryCarrier>,
}

impl MemoryField {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        MemoryField {
            name: name.into(),
            text,
            caret,
            carriers: BTreeMap::new(),
        }
    }

    /// Puts the field in the state a user edit leaves it in: new raw text and
    /// the caret where the browser would have it. The coordinator still has to
    /// be told about the edit.
    pub fn type_raw(&mut self, raw: &str, caret: usize) {
        self.text = raw.to_string();
        self.caret = caret;
    }

    pub fn carrier(&self, name: &str) -> Option<&MemoryCarrier> {
        self.carriers.get(name)
    }

    pub fn carrier_count(&self) -> usize {
        self.carriers.len()
    }
}

impl FieldHost for MemoryField {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        // Setting a value programmatically moves the caret to the end
        self.caret = self.text.chars().count();
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.text.chars().count());
    }

    fn ensure_carrier(&mut self, name: &str) -> &mut dyn CarrierField {
        if !self.carriers.contains_key(name) {
            tracing::debug!(carrier = %name, "Creating carrier field.");
        }
        self.carriers.entry(name.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_caret_at_end() {
        let field = MemoryField::new("amount", "1,234");
        assert_eq!(field.caret(), 5);
    }

    #[test]
    fn test_set_caret_is_bounded() {
        let mut field = MemoryField::new("amount", "12");
        field.set_caret(10);
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_ensure_carrier_is_idempotent() {
        let mut field = MemoryField::new("amount", "");
        field.ensure_carrier("amount_backend").set_value("1.00");
        field.ensure_carrier("amount_backend").set_value("2.00");
        assert_eq!(field.carrier_count(), 1);
        assert_eq!(field.carrier("amount_backend").map(|c| c.value()), Some("2.00"));
    }
}
