// Pure formatting algorithms. Nothing here touches a field host.
pub mod caret;
pub mod formatter;
pub mod parser;
pub mod sanitizer;

pub use caret::reconcile_caret;
pub use formatter::format;
pub use parser::{fixed_decimal, parse, to_fixed};
pub use sanitizer::sanitize;
