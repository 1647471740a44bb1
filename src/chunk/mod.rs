//! Splitting oversized files into named parts.
//!
//! [`plan_parts`] does the arithmetic and naming; [`split`] turns a plan into
//! lazy [`FileBlob`] views. The split worker goes through the same plan.

pub mod sizes;

use crate::{ChunkPart, FileBlob, Result, UploadError};
use sizes::MAX_FILE_SIZE;

/// Splits `name` at its last `.`; the extension keeps the dot.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// `video.mp4`, 2, 3 -> `video.part2of3.mp4`
pub fn part_name(name: &str, index: u64, total: u64) -> String {
    let (base, extension) = split_name(name);
    format!("{}.part{}of{}{}", base, index, total, extension)
}

pub fn part_count(size: u64, max_chunk_size: u64) -> Result<u64> {
    if max_chunk_size == 0 {
        return Err(UploadError::InvalidChunkSize(max_chunk_size));
    }
    if size <= max_chunk_size {
        return Ok(1);
    }
    Ok(size.div_ceil(max_chunk_size))
}

/// Lays out the parts of a `size` byte file.
///
/// A file that fits in one chunk comes back as a single part covering
/// everything, under its own name. Otherwise the ranges are contiguous,
/// ascending and cover `0..size` exactly.
pub fn plan_parts(name: &str, mime_type: &str, size: u64, max_chunk_size: u64) -> Result<Vec<ChunkPart>> {
    let total = part_count(size, max_chunk_size)?;
    if total == 1 {
        return Ok(vec![ChunkPart {
            name: name.to_string(),
            range: 0..size,
            mime_type: mime_type.to_string(),
        }]);
    }

    let parts = (0..total)
        .map(|i| {
            let start = i * max_chunk_size;
            let end = start.saturating_add(max_chunk_size).min(size);
            ChunkPart {
                name: part_name(name, i + 1, total),
                range: start..end,
                mime_type: mime_type.to_string(),
            }
        })
        .collect();

    Ok(parts)
}

pub fn split(file: &FileBlob, max_chunk_size: u64) -> Result<Vec<FileBlob>> {
    let plan = plan_parts(&file.name, &file.mime_type, file.size(), max_chunk_size)?;
    if plan.len() == 1 {
        return Ok(vec![file.clone()]);
    }

    plan.into_iter()
        .map(|part| file.slice(part.range, part.name))
        .collect()
}

pub fn split_default(file: &FileBlob) -> Result<Vec<FileBlob>> {
    split(file, MAX_FILE_SIZE)
}
