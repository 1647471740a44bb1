use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One contiguous slice of a source file, named as an independent sub-file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkPart {
    pub name: String,
    pub range: Range<u64>,
    pub mime_type: String,
}

impl ChunkPart {
    pub fn len(&self) -> u64 {
        self.range.end - self.range.start
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
