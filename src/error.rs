use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidelineGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ignore pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown rule group: {0}")]
    UnknownRuleGroup(String),
}

pub type Result<T> = std::result::Result<T, GuidelineGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
