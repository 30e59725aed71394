use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing file {}", path.display())]
    DestinationExists { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid timestamp \"{input}\" (expected YYYYMMDD_HHMMSS)")]
    InvalidTimestamp { input: String },

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
