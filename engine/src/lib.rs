// Amount formatter library root.
//
// `format` holds the pure algorithms (sanitize, group, parse, caret
// re-anchoring); `field` binds them to a text input through the `FieldHost`
// capability interface.

pub mod config;
pub mod error;
pub mod field;
pub mod format;
pub mod script;

pub use config::FormatSettings;
pub use error::{FormatError, Result};
pub use field::{AmountField, FieldHost};
