use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("no handle provided: please provide a competitor's handle to analyze")]
    MissingHandle,
    #[error("invalid category: {0} (expected trends, hashtags or formats)")]
    InvalidCategory(String),
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("failed to write config {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid bind address: {0}")]
    InvalidAddress(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to initialize tracing: {0}")]
    Telemetry(String),
}
