use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::store::FileStore;
use crate::{FileBlob, FileKey, Result};

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub name: String,
    pub mime_type: String,
    pub data: Bytes,
}

/// In-process store that keeps the most recently submitted blobs.
///
/// Blobs are keyed by their local key. Empty blobs are declined.
#[derive(Clone)]
pub struct MemoryStore {
    files: Arc<Mutex<LruCache<FileKey, StoredFile>>>,
    urls: Arc<Mutex<HashMap<String, FileKey>>>,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            files: Arc::new(Mutex::new(LruCache::new(capacity))),
            urls: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &FileKey) -> Option<StoredFile> {
        let mut files = self.files.lock().await;
        files.get(key).cloned()
    }

    /// Bytes behind an object URL handed out by `resolve_url`.
    pub async fn fetch(&self, url: &str) -> Option<Bytes> {
        let key = self.urls.lock().await.get(url).cloned()?;
        self.get(&key).await.map(|file| file.data)
    }

    pub async fn len(&self) -> usize {
        self.files.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn invalidate(&self, key: &FileKey) {
        let mut files = self.files.lock().await;
        files.pop(key);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn submit(&self, file: FileBlob) -> Result<Option<FileKey>> {
        if file.is_empty() {
            debug!("Declining empty file {}", file.name);
            return Ok(None);
        }

        let key = file.local_key();
        let data = file.read_all().await?;
        let stored = StoredFile {
            name: file.name,
            mime_type: file.mime_type,
            data,
        };

        let mut files = self.files.lock().await;
        files.put(key.clone(), stored);
        Ok(Some(key))
    }

    async fn resolve_url(&self, key: &FileKey) -> Option<String> {
        if !self.files.lock().await.contains(key) {
            return None;
        }

        let url = format!("blob:{}", Uuid::new_v4());
        self.urls.lock().await.insert(url.clone(), key.clone());
        Some(url)
    }

    async fn revoke_url(&self, url: &str) {
        self.urls.lock().await.remove(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submitted_blob_resolves_to_its_bytes() {
        let store = MemoryStore::default();
        let blob = FileBlob::from_bytes("a.txt", "text/plain", 1000, &b"hello"[..]);

        let key = store.submit(blob).await.unwrap().unwrap();
        assert_eq!(key, "a.txt-text/plain-1000-5");

        let url = store.resolve_url(&key).await.unwrap();
        assert!(url.starts_with("blob:"));
        assert_eq!(store.fetch(&url).await.unwrap(), Bytes::from_static(b"hello"));

        store.revoke_url(&url).await;
        assert!(store.fetch(&url).await.is_none());
    }

    #[tokio::test]
    async fn empty_blob_is_declined() {
        let store = MemoryStore::default();
        let blob = FileBlob::from_bytes("empty", "", 0, Bytes::new());
        assert!(store.submit(blob).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn oldest_entry_is_evicted() {
        let store = MemoryStore::new(1);
        let first = store
            .submit(FileBlob::from_bytes("1", "", 0, &b"a"[..]))
            .await
            .unwrap()
            .unwrap();
        store
            .submit(FileBlob::from_bytes("2", "", 0, &b"b"[..]))
            .await
            .unwrap();

        assert!(store.get(&first).await.is_none());
        assert!(store.resolve_url(&first).await.is_none());
    }
}
