use thiserror::Error;

/// Error type that captures store access and record decoding failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed record {id}: {reason}")]
    MalformedRecord { id: String, reason: String },
    #[error("Storage error: {0}")]
    Storage(String),
}
