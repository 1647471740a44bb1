use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(u64),
    #[error("File of {size} bytes exceeds the {ceiling} byte ceiling")]
    OversizedFile { size: u64, ceiling: u64 },
    #[error("Range {start}..{end} is outside a source of {len} bytes")]
    OutOfBounds { start: u64, end: u64, len: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store error: {0}")]
    Store(String),
    #[error("Split worker error: {0}")]
    Worker(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UploadError>;
