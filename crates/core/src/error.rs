use std::io;

/// Errors that can occur during snowscape-runner operations
///
/// The detection/resolution pipeline itself never fails: recognition
/// misses produce no target and manifest problems degrade to an
/// unscoped command. These variants cover the surrounding machinery
/// (config files, document reads, JSON emission, process launch).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No previewable function found at the specified location")]
    NoPreviewFound,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for snowscape-runner operations
pub type Result<T> = std::result::Result<T, Error>;
