use std::io::SeekFrom;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::{Result, UploadError};

/// Random-access bytes behind a [`FileBlob`](crate::FileBlob).
#[async_trait]
pub trait ByteSource: Send + Sync {
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn read_range(&self, range: Range<u64>) -> Result<Bytes>;
}

pub(crate) fn check_range(range: &Range<u64>, len: u64) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(UploadError::OutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

pub struct MemorySource {
    data: Bytes,
}

impl MemorySource {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }
}

#[async_trait]
impl ByteSource for MemorySource {
    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    async fn read_range(&self, range: Range<u64>) -> Result<Bytes> {
        check_range(&range, self.len())?;
        Ok(self.data.slice(range.start as usize..range.end as usize))
    }
}

/// Reads straight from a file on disk, one range at a time.
pub struct DiskSource {
    path: PathBuf,
    len: u64,
}

impl DiskSource {
    pub fn new<P: AsRef<Path>>(path: P, len: u64) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            len,
        }
    }

    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let metadata = fs::metadata(path.as_ref()).await?;
        Ok(Self::new(path, metadata.len()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ByteSource for DiskSource {
    fn len(&self) -> u64 {
        self.len
    }

    async fn read_range(&self, range: Range<u64>) -> Result<Bytes> {
        check_range(&range, self.len)?;
        let wanted = usize::try_from(range.end - range.start).map_err(|_| UploadError::OutOfBounds {
            start: range.start,
            end: range.end,
            len: self.len,
        })?;

        let mut file = fs::File::open(&self.path).await?;
        file.seek(SeekFrom::Start(range.start)).await?;
        let mut buf = vec![0u8; wanted];
        file.read_exact(&mut buf).await?;
        Ok(Bytes::from(buf))
    }
}

/// A window onto another source. Offsets are relative to the window.
pub struct SliceSource {
    inner: Arc<dyn ByteSource>,
    offset: u64,
    len: u64,
}

impl SliceSource {
    pub fn new(inner: Arc<dyn ByteSource>, range: Range<u64>) -> Self {
        Self {
            inner,
            offset: range.start,
            len: range.end.saturating_sub(range.start),
        }
    }
}

#[async_trait]
impl ByteSource for SliceSource {
    fn len(&self) -> u64 {
        self.len
    }

    async fn read_range(&self, range: Range<u64>) -> Result<Bytes> {
        check_range(&range, self.len)?;
        self.inner
            .read_range(self.offset + range.start..self.offset + range.end)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_source_rejects_reversed_ranges() {
        let source = MemorySource::new(vec![1u8, 2, 3]);
        #[allow(clippy::reversed_empty_ranges)]
        let result = source.read_range(2..1).await;
        assert!(matches!(result, Err(UploadError::OutOfBounds { .. })));
    }

    #[tokio::test]
    async fn nested_slices_compose_offsets() {
        let base: Arc<dyn ByteSource> = Arc::new(MemorySource::new(&b"abcdefghij"[..]));
        let outer: Arc<dyn ByteSource> = Arc::new(SliceSource::new(base, 2..9));
        let inner = SliceSource::new(outer, 1..4);

        assert_eq!(inner.len(), 3);
        assert_eq!(inner.read_range(0..3).await.unwrap(), Bytes::from_static(b"def"));
        assert!(inner.read_range(0..4).await.is_err());
    }
}
