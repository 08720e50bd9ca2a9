//! Configuration loading errors.

use super::error_code::{self, VigilErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

impl VigilErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => error_code::CONFIG_IO,
            Self::TomlParse(_) => error_code::CONFIG_PARSE,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
