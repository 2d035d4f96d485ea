use std::path::PathBuf;

use thiserror::Error;

/// User-correctable conditions. Surfaced as a toast, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Please upload only PNG or JPG files")]
    UnsupportedFileType { media_type: String },
    #[error("Please upload your payment receipt")]
    MissingReceipt,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}
