// Explicit state machine for a bound amount field.
//
// `transition` is a pure function of (state, event, settings). It returns the
// next state plus the effects a host must apply; the coordinator does the
// applying. Nothing here depends on a host.
use crate::config::FormatSettings;
use crate::format::{fixed_decimal, format, reconcile_caret, sanitize, to_fixed};
use serde::Serialize;
use shared::models::{BackendValue, DisplayValue, EditContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPhase {
    /// No text and no placeholder zero was cleared.
    Empty,
    /// The field holds text, including transient forms like `0.` or `12.`.
    Editing,
    /// The field held the placeholder `0` and focus cleared it.
    FocusedEmpty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    display: DisplayValue,
    phase: FieldPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Edit(EditContext),
    Focus,
    Blur,
    Submit,
}

impl FieldEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FieldEvent::Edit(_) => "edit",
            FieldEvent::Focus => "focus",
            FieldEvent::Blur => "blur",
            FieldEvent::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetText(DisplayValue),
    SetCaret(usize),
    WriteCarrier(BackendValue),
}

impl FieldState {
    /// State at bind time. An empty field stays empty; anything else is
    /// stripped of grouping and re-rendered.
    pub fn initial(text: &str, settings: &FormatSettings) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        Self::holding(format(&sanitize(text, settings), settings))
    }

    /// Adopts whatever text the host currently shows, without normalizing it.
    pub fn observed(text: &str) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        Self::holding(DisplayValue::new_unchecked(text.to_string()))
    }

    fn empty() -> Self {
        FieldState {
            display: DisplayValue::default(),
            phase: FieldPhase::Empty,
        }
    }

    fn holding(display: DisplayValue) -> Self {
        let phase = if display.is_empty() { FieldPhase::Empty } else { FieldPhase::Editing };
        FieldState { display, phase }
    }

    pub fn display(&self) -> &DisplayValue {
        &self.display
    }

    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    fn is_placeholder_zero(&self) -> bool {
        self.display.as_str() == "0"
    }
}

pub fn transition(
    state: &FieldState,
    event: &FieldEvent,
    settings: &FormatSettings,
) -> (FieldState, Vec<Effect>) {
    match event {
        FieldEvent::Edit(ctx) => on_edit(ctx, settings),
        FieldEvent::Focus => on_focus(state),
        FieldEvent::Blur => on_blur(state, settings),
        FieldEvent::Submit => {
            let backend = backend_value(state, settings);
            (state.clone(), vec![Effect::WriteCarrier(backend)])
        }
    }
}

fn on_edit(ctx: &EditContext, settings: &FormatSettings) -> (FieldState, Vec<Effect>) {
    let display = format(&sanitize(&ctx.raw, settings), settings);
    let caret = reconcile_caret(
        &ctx.raw,
        display.as_str(),
        ctx.caret,
        ctx.kind.is_deletion(),
        settings,
    );
    let next = FieldState::holding(display.clone());
    (next, vec![Effect::SetText(display), Effect::SetCaret(caret)])
}

fn on_focus(state: &FieldState) -> (FieldState, Vec<Effect>) {
    if !state.is_placeholder_zero() {
        return (state.clone(), Vec::new());
    }
    let next = FieldState {
        display: DisplayValue::default(),
        phase: FieldPhase::FocusedEmpty,
    };
    (next, vec![Effect::SetText(DisplayValue::default())])
}

fn on_blur(state: &FieldState, settings: &FormatSettings) -> (FieldState, Vec<Effect>) {
    let text = state.display.as_str();
    let display = if is_blank(text, settings) {
        DisplayValue::new_unchecked("0".to_string())
    } else {
        let fixed = fixed_decimal(text, settings.max_fraction_digits, settings).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Unparseable field text on blur, rendering zero.");
            to_fixed(0.0, settings.max_fraction_digits)
        });
        render_fixed(&fixed, settings)
    };
    (FieldState::holding(display.clone()), vec![Effect::SetText(display)])
}

/// Backend string for the current text: empty for `""` and the placeholder
/// `0`, otherwise the amount with a fixed number of decimals.
pub fn backend_value(state: &FieldState, settings: &FormatSettings) -> BackendValue {
    let text = state.display.as_str();
    if text.is_empty() || state.is_placeholder_zero() {
        return BackendValue::empty();
    }
    match fixed_decimal(text, settings.max_fraction_digits, settings) {
        Ok(fixed) => BackendValue::new_unchecked(fixed),
        Err(err) => {
            tracing::warn!(error = %err, "Unparseable field text on submit, sending empty value.");
            BackendValue::empty()
        }
    }
}

fn is_blank(text: &str, settings: &FormatSettings) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), None) => c == settings.decimal_separator,
        _ => false,
    }
}

// Fixed-decimal text in display form, e.g. "1234.50" -> "1,234.50".
fn render_fixed(fixed: &str, settings: &FormatSettings) -> DisplayValue {
    let fixed: String = fixed
        .chars()
        .map(|c| if c == '.' { settings.decimal_separator } else { c })
        .collect();
    format(&sanitize(&fixed, settings), settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EditKind;

    fn settings() -> FormatSettings {
        FormatSettings::default()
    }

    fn state(text: &str) -> FieldState {
        FieldState::observed(text)
    }

    fn text_after(state: &FieldState, event: FieldEvent) -> String {
        transition(state, &event, &settings()).0.display().to_string()
    }

    #[test]
    fn test_initial_empty_stays_empty() {
        let s = FieldState::initial("", &settings());
        assert_eq!(s.phase(), FieldPhase::Empty);
        assert_eq!(s.display().as_str(), "");
    }

    #[test]
    fn test_initial_value_is_regrouped() {
        assert_eq!(FieldState::initial("1234567.5", &settings()).display().as_str(), "1,234,567.5");
        assert_eq!(FieldState::initial("12,34,5", &settings()).display().as_str(), "12,345");
        assert_eq!(FieldState::initial("1000.999", &settings()).display().as_str(), "1,000.99");
    }

    #[test]
    fn test_edit_formats_and_places_caret() {
        let ctx = EditContext::new("12345", 5, EditKind::Other);
        let (next, effects) = transition(&state("1,234"), &FieldEvent::Edit(ctx), &settings());
        assert_eq!(next.display().as_str(), "12,345");
        assert_eq!(next.phase(), FieldPhase::Editing);
        assert_eq!(
            effects,
            vec![
                Effect::SetText(DisplayValue::new_unchecked("12,345".to_string())),
                Effect::SetCaret(6),
            ]
        );
    }

    #[test]
    fn test_backward_delete_reanchors_caret() {
        let ctx = EditContext::new("1,23", 4, EditKind::DeleteBackward);
        let (next, effects) = transition(&state("1,234"), &FieldEvent::Edit(ctx), &settings());
        assert_eq!(next.display().as_str(), "123");
        assert_eq!(effects[1], Effect::SetCaret(3));
    }

    #[test]
    fn test_edit_to_nothing_is_empty() {
        let ctx = EditContext::new("", 0, EditKind::DeleteBackward);
        let (next, _) = transition(&state("5"), &FieldEvent::Edit(ctx), &settings());
        assert_eq!(next.phase(), FieldPhase::Empty);
    }

    #[test]
    fn test_focus_clears_placeholder_zero() {
        let (next, effects) = transition(&state("0"), &FieldEvent::Focus, &settings());
        assert_eq!(next.display().as_str(), "");
        assert_eq!(next.phase(), FieldPhase::FocusedEmpty);
        assert_eq!(effects, vec![Effect::SetText(DisplayValue::default())]);
    }

    #[test]
    fn test_focus_leaves_other_text_alone() {
        for text in ["", "0.00", "12", "0."] {
            let before = state(text);
            let (next, effects) = transition(&before, &FieldEvent::Focus, &settings());
            assert_eq!(next, before);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_blur_normalization() {
        assert_eq!(text_after(&state(""), FieldEvent::Blur), "0");
        assert_eq!(text_after(&state("."), FieldEvent::Blur), "0");
        assert_eq!(text_after(&state("12"), FieldEvent::Blur), "12.00");
        assert_eq!(text_after(&state("1,234.5"), FieldEvent::Blur), "1,234.50");
        assert_eq!(text_after(&state("0."), FieldEvent::Blur), "0.00");
        assert_eq!(text_after(&state(".5"), FieldEvent::Blur), "0.50");
    }

    #[test]
    fn test_blur_after_focus_clear_returns_to_zero() {
        let (cleared, _) = transition(&state("0"), &FieldEvent::Focus, &settings());
        let (rest, _) = transition(&cleared, &FieldEvent::Blur, &settings());
        assert_eq!(rest.display().as_str(), "0");
        assert_eq!(rest.phase(), FieldPhase::Editing);
    }

    #[test]
    fn test_blur_falls_back_on_garbage() {
        assert_eq!(text_after(&state("abc"), FieldEvent::Blur), "0.00");
    }

    #[test]
    fn test_submit_derivation() {
        assert_eq!(backend_value(&state("1,234.5"), &settings()).as_str(), "1234.50");
        assert_eq!(backend_value(&state("0"), &settings()).as_str(), "");
        assert_eq!(backend_value(&state(""), &settings()).as_str(), "");
        assert_eq!(backend_value(&state("1,000,000"), &settings()).as_str(), "1000000.00");
        assert_eq!(backend_value(&state("abc"), &settings()).as_str(), "");
    }

    #[test]
    fn test_overflowing_paste_keeps_backend_contract() {
        let huge = "9".repeat(400);
        let ctx = EditContext::new(huge.clone(), 400, EditKind::Other);
        let (edited, _) = transition(&state(""), &FieldEvent::Edit(ctx), &settings());

        let backend = backend_value(&edited, &settings());
        assert_eq!(backend.as_str(), format!("{}.00", huge));

        let (blurred, _) = transition(&edited, &FieldEvent::Blur, &settings());
        assert!(blurred.display().as_str().ends_with(",999.00"));
        assert_eq!(blurred.phase(), FieldPhase::Editing);
    }

    #[test]
    fn test_large_amount_keeps_every_digit() {
        let s = state("12,345,678,901,234,567,891");
        assert_eq!(backend_value(&s, &settings()).as_str(), "12345678901234567891.00");
        assert_eq!(text_after(&s, FieldEvent::Blur), "12,345,678,901,234,567,891.00");
    }

    #[test]
    fn test_submit_does_not_change_state() {
        let before = state("12.5");
        let (next, effects) = transition(&before, &FieldEvent::Submit, &settings());
        assert_eq!(next, before);
        assert_eq!(effects, vec![Effect::WriteCarrier(BackendValue::new_unchecked("12.50".to_string()))]);
    }

    #[test]
    fn test_swapped_convention_blur_and_submit() {
        let settings = FormatSettings {
            grouping_separator: '.',
            decimal_separator: ',',
            ..FormatSettings::default()
        };
        let s = FieldState::observed("1.234,5");
        let (blurred, _) = transition(&s, &FieldEvent::Blur, &settings);
        assert_eq!(blurred.display().as_str(), "1.234,50");
        // Backend format ignores the display convention
        assert_eq!(backend_value(&s, &settings).as_str(), "1234.50");
        assert_eq!(transition(&FieldState::observed(","), &FieldEvent::Blur, &settings).0.display().as_str(), "0");
    }
}
