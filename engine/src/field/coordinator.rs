// Binds the state machine to a field host and applies the resulting effects.
use super::host::FieldHost;
use super::state::{transition, Effect, FieldEvent, FieldPhase, FieldState};
use crate::config::FormatSettings;
use shared::models::{BackendValue, EditContext, EditKind};

/// A text input bound to the amount formatter.
///
/// Every handler runs to completion before returning; the host is expected to
/// call them from its event loop, one at a time. The coordinator owns the
/// host, so a field cannot be bound twice.
pub struct AmountField<H: FieldHost> {
    host: H,
    settings: FormatSettings,
    state: FieldState,
}

impl<H: FieldHost> AmountField<H> {
    /// Binds `host` and normalizes whatever text it starts with.
    pub fn attach(mut host: H, settings: FormatSettings) -> Self {
        let initial = host.text();
        let state = FieldState::initial(&initial, &settings);
        if state.display().as_str() != initial {
            host.set_text(state.display().as_str());
        }
        tracing::debug!(field = %host.name(), text = %state.display(), "Attached amount field.");
        AmountField { host, settings, state }
    }

    /// Handles an edit the host has already applied to its text and caret.
    pub fn on_edit(&mut self, kind: EditKind) {
        let ctx = EditContext::new(self.host.text(), self.host.caret(), kind);
        self.dispatch(FieldEvent::Edit(ctx));
    }

    pub fn on_focus(&mut self) {
        self.dispatch(FieldEvent::Focus);
    }

    pub fn on_blur(&mut self) {
        self.dispatch(FieldEvent::Blur);
    }

    /// Writes the backend value into the carrier field and returns it.
    pub fn on_submit(&mut self) -> BackendValue {
        let mut written = BackendValue::empty();
        for effect in self.dispatch(FieldEvent::Submit) {
            if let Effect::WriteCarrier(value) = effect {
                written = value;
            }
        }
        written
    }

    pub fn dispatch(&mut self, event: FieldEvent) -> Vec<Effect> {
        self.sync_with_host();
        let (next, effects) = transition(&self.state, &event, &self.settings);
        tracing::debug!(
            field = %self.host.name(),
            event = event.name(),
            from = ?self.state.phase(),
            to = ?next.phase(),
            text = %next.display(),
            "Field transition."
        );
        self.state = next;
        for effect in &effects {
            self.apply(effect);
        }
        effects
    }

    pub fn phase(&self) -> FieldPhase {
        self.state.phase()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    // Text set on the host behind our back is adopted as-is before the next
    // transition reads it. Edits carry their own raw text, so this only
    // matters for focus, blur and submit.
    fn sync_with_host(&mut self) {
        let text = self.host.text();
        if text != self.state.display().as_str() {
            self.state = FieldState::observed(&text);
        }
    }

    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetText(display) => self.host.set_text(display.as_str()),
            Effect::SetCaret(caret) => self.host.set_caret(*caret),
            Effect::WriteCarrier(value) => {
                let name = self.settings.carrier_name(self.host.name());
                self.host.ensure_carrier(&name).set_value(value.as_str());
            }
        }
    }
}
