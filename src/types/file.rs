use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::fs;

use crate::storage::source::{check_range, ByteSource, DiskSource, MemorySource, SliceSource};
use crate::{FileKey, Result};

/// How many leading bytes are handed to `infer` when sniffing a type.
const SNIFF_LEN: u64 = 8192;

/// A named, typed, immutable run of bytes.
///
/// Cloning is cheap: the underlying source is shared.
#[derive(Clone)]
pub struct FileBlob {
    pub name: String,
    pub mime_type: String,
    /// Epoch milliseconds.
    pub last_modified: i64,
    source: Arc<dyn ByteSource>,
}

impl FileBlob {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        last_modified: i64,
        source: Arc<dyn ByteSource>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            last_modified,
            source,
        }
    }

    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        last_modified: i64,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::new(name, mime_type, last_modified, Arc::new(MemorySource::new(data)))
    }

    /// Opens a file on disk without reading it. The type is sniffed from
    /// the first bytes and left empty when nothing matches.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;

        let metadata = fs::metadata(path).await?;
        let last_modified = DateTime::<Utc>::from(metadata.modified()?).timestamp_millis();
        let source = DiskSource::new(path, metadata.len());

        let head = source.read_range(0..metadata.len().min(SNIFF_LEN)).await?;
        let mime_type = detect_mime_type(&head).unwrap_or_default();

        Ok(Self::new(name, mime_type, last_modified, Arc::new(source)))
    }

    pub fn size(&self) -> u64 {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.last_modified)
    }

    pub fn local_key(&self) -> FileKey {
        FileKey::local(&self.name, &self.mime_type, self.last_modified, self.size())
    }

    /// A lazy view of `range` under a new name. Type and timestamp carry over.
    pub fn slice(&self, range: Range<u64>, name: impl Into<String>) -> Result<FileBlob> {
        check_range(&range, self.size())?;
        let view = SliceSource::new(Arc::clone(&self.source), range);
        Ok(Self::new(name, self.mime_type.clone(), self.last_modified, Arc::new(view)))
    }

    pub async fn read_range(&self, range: Range<u64>) -> Result<Bytes> {
        self.source.read_range(range).await
    }

    pub async fn read_all(&self) -> Result<Bytes> {
        self.source.read_range(0..self.size()).await
    }
}

impl fmt::Debug for FileBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBlob")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("last_modified", &self.last_modified)
            .field("size", &self.size())
            .finish()
    }
}

pub fn detect_mime_type(data: &[u8]) -> Option<String> {
    infer::get(data).map(|kind| kind.mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn slice_reads_the_window() {
        let blob = FileBlob::from_bytes("a.bin", "application/octet-stream", 5, &b"0123456789"[..]);
        let part = blob.slice(3..7, "a.part1of1.bin").unwrap();

        assert_eq!(part.size(), 4);
        assert_eq!(part.mime_type, "application/octet-stream");
        assert_eq!(part.last_modified, 5);
        assert_eq!(part.read_all().await.unwrap(), Bytes::from_static(b"3456"));
    }

    #[test]
    fn slice_past_the_end_is_rejected() {
        let blob = FileBlob::from_bytes("a", "", 0, vec![0u8; 4]);
        assert!(blob.slice(2..5, "b").is_err());
    }

    #[test]
    fn png_header_is_sniffed() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(detect_mime_type(&png).as_deref(), Some("image/png"));
        assert_eq!(detect_mime_type(b"plain words"), None);
    }
}
