use async_trait::async_trait;

use crate::{FileBlob, FileKey, Result};

/// The cache that persists submitted blobs and hands back keys for them.
///
/// Retention is the store's business; callers only submit and resolve.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Takes ownership of `file` so its buffers go away once the call returns.
    /// `Ok(None)` means the store declined to produce a key.
    async fn submit(&self, file: FileBlob) -> Result<Option<FileKey>>;

    async fn resolve_url(&self, key: &FileKey) -> Option<String>;

    async fn revoke_url(&self, _url: &str) {}
}
