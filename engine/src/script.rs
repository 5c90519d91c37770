// Replay scripts: a recorded sequence of field events in JSON, played back
// against an in-memory field.
//
// {
//   "field_name": "amount",
//   "initial": "",
//   "events": [
//     { "type": "focus" },
//     { "type": "edit", "raw": "12345", "caret": 5 },
//     { "type": "edit", "raw": "1,23", "caret": 4, "kind": "delete_backward" },
//     { "type": "blur" },
//     { "type": "submit" }
//   ]
// }
use crate::config::FormatSettings;
use crate::error::Result;
use crate::field::{AmountField, CarrierField, FieldHost, FieldPhase, MemoryField};
use serde::{Deserialize, Serialize};
use shared::models::EditKind;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    #[serde(default = "default_field_name")]
    pub field_name: String,
    #[serde(default)]
    pub initial: String,
    pub events: Vec<ScriptEvent>,
}

fn default_field_name() -> String {
    "amount".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Edit {
        raw: String,
        caret: usize,
        #[serde(default = "default_edit_kind")]
        kind: EditKind,
    },
    Focus,
    Blur,
    Submit,
}

fn default_edit_kind() -> EditKind {
    EditKind::Other
}

impl ScriptEvent {
    fn label(&self) -> &'static str {
        match self {
            ScriptEvent::Edit { .. } => "edit",
            ScriptEvent::Focus => "focus",
            ScriptEvent::Blur => "blur",
            ScriptEvent::Submit => "submit",
        }
    }
}

/// Field state after one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub event: &'static str,
    pub text: String,
    pub caret: usize,
    pub phase: FieldPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

impl ReplayScript {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let script_str = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&script_str)?)
    }

    /// Plays every event in order and reports the field after each one.
    pub fn replay(&self, settings: &FormatSettings) -> Vec<StepReport> {
        let host = MemoryField::new(self.field_name.clone(), self.initial.clone());
        let mut field = AmountField::attach(host, settings.clone());
        let carrier_name = settings.carrier_name(&self.field_name);

        self.events
            .iter()
            .map(|event| {
                match event {
                    ScriptEvent::Edit { raw, caret, kind } => {
                        field.host_mut().type_raw(raw, *caret);
                        field.on_edit(*kind);
                    }
                    ScriptEvent::Focus => field.on_focus(),
                    ScriptEvent::Blur => field.on_blur(),
                    ScriptEvent::Submit => {
                        field.on_submit();
                    }
                }
                let host = field.host();
                StepReport {
                    event: event.label(),
                    text: host.text(),
                    caret: host.caret(),
                    phase: field.phase(),
                    carrier: host.carrier(&carrier_name).map(|c| c.value().to_string()),
                }
            })
            .collect()
    }
}
