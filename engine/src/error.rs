use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    // The only error the formatting algorithms themselves can produce.
    // Callers guard against empty and lone-separator text before parsing.
    #[error("Malformed numeric text: '{0}'")]
    MalformedNumericText(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
