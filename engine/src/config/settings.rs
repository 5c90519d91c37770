// Numeric convention used by the formatter, loaded from JSON or defaulted.
use crate::error::{FormatError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormatSettings {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
    // Appended to the field name to address the carrier field on submit
    pub carrier_suffix: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            grouping_separator: ',',
            decimal_separator: '.',
            max_fraction_digits: 2,
            carrier_suffix: "_backend".to_string(),
        }
    }
}

impl FormatSettings {
    /// Settings embedded in the binary (`engine/config/default.json`).
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self> {
        let settings: FormatSettings = serde_json::from_str(config_str)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grouping_separator == self.decimal_separator {
            return Err(FormatError::ConfigError(format!(
                "grouping and decimal separator are both '{}'",
                self.grouping_separator
            )));
        }
        if self.grouping_separator.is_ascii_digit() || self.decimal_separator.is_ascii_digit() {
            return Err(FormatError::ConfigError("separators cannot be digits".to_string()));
        }
        Ok(())
    }

    /// Name of the hidden carrier field that receives the backend value.
    pub fn carrier_name(&self, field_name: &str) -> String {
        format!("{}{}", field_name, self.carrier_suffix)
    }
}
