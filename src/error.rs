use thiserror::Error;

pub type Result<T> = std::result::Result<T, MissionControlError>;

#[derive(Debug, Error)]
pub enum MissionControlError {
    #[error("Task {expected} is not at the source position (found {found})")]
    TaskMismatch { expected: String, found: String },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Index {index} out of range for column {column} (length {len})")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Invalid memory file path: {0}")]
    InvalidPath(String),

    #[error("Memory directory unavailable: {0}")]
    MemoryDirUnavailable(String),

    #[error("Backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("Backend API error: {0}")]
    BackendStatus(u16),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
