//! Error types for Pagewright settings and fixtures

use thiserror::Error;

/// Result type alias using Pagewright Error
pub type Result<T> = std::result::Result<T, Error>;

/// Pagewright common error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {key} = {value:?} ({reason})")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}

impl Error {
    pub fn invalid_config(key: &str, value: &str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
