//! Named byte sizes and the size band policy.
//!
//! Everything below 2000 MB is in 1024-based units. `MB2000` is the upload
//! ceiling and is pinned to 2,000,000,000 bytes.

use crate::{Result, UploadError};

pub const KB64: u64 = 65_536;
pub const KB128: u64 = 131_072;
pub const KB256: u64 = 262_144;
pub const KB512: u64 = 524_288;
pub const MB1: u64 = 1_048_576;
pub const MB10: u64 = 10_485_760;
pub const MB50: u64 = 52_428_800;
pub const MB100: u64 = 104_857_600;
pub const MB750: u64 = 786_432_000;
pub const MB1500: u64 = 1_572_864_000;
pub const MB2000: u64 = 2_000_000_000;

/// Largest file admitted without being split into parts.
pub const MAX_FILE_SIZE: u64 = MB2000;

/// Per-chunk size for a file of `total_size` bytes.
///
/// This is reporting only; the partitioner does not consume it.
pub fn chunk_size_for_file_size(total_size: u64) -> Result<u64> {
    match total_size {
        size if size <= MB100 => Ok(KB128),
        size if size <= MB750 => Ok(KB256),
        size if size <= MAX_FILE_SIZE => Ok(KB512),
        size => Err(UploadError::OversizedFile {
            size,
            ceiling: MAX_FILE_SIZE,
        }),
    }
}
