use serde::{Deserialize, Serialize};

use crate::chunk::sizes::MAX_FILE_SIZE;
use crate::{Result, UploadError};

pub const SW_STREAM_PATH: &str = "/sw/stream";
pub const SW_SAVE_PATH: &str = "/sw/save";

/// Paths served by the local streaming intermediary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamEndpoints {
    pub stream_path: String,
    pub save_path: String,
}

impl Default for StreamEndpoints {
    fn default() -> Self {
        Self {
            stream_path: SW_STREAM_PATH.to_string(),
            save_path: SW_SAVE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    /// Files at or below this size are submitted whole.
    pub ceiling: u64,
    /// Part size used once a file is over the ceiling.
    pub max_chunk_size: u64,
    /// Parts of one file in flight at once. 1 submits strictly in order.
    pub concurrency: usize,
    pub endpoints: StreamEndpoints,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            ceiling: MAX_FILE_SIZE,
            max_chunk_size: MAX_FILE_SIZE,
            concurrency: 1,
            endpoints: StreamEndpoints::default(),
        }
    }
}

impl UploaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_ceiling(mut self, ceiling: u64) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn with_max_chunk_size(mut self, max_chunk_size: u64) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_endpoints(mut self, endpoints: StreamEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(UploadError::InvalidChunkSize(self.max_chunk_size));
        }
        if self.concurrency == 0 {
            return Err(UploadError::InvalidConfig("concurrency must be at least 1".to_string()));
        }
        Ok(())
    }
}
