use futures::future::join_all;
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, warn};

use super::store::FileStore;
use crate::chunk;
use crate::config::UploaderConfig;
use crate::stream::StreamUrlBuilder;
use crate::{DownloadingFile, FileBlob, FileKey, Result, SaveTarget};

/// Name suggested for a save when the file has none.
const DEFAULT_SAVE_NAME: &str = "file";

/// Turns user files into store keys, splitting the ones over the ceiling.
pub struct Uploader<S: FileStore> {
    store: S,
    config: UploaderConfig,
}

impl<S: FileStore> Uploader<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, UploaderConfig::default())
    }

    pub fn with_config(store: S, config: UploaderConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    pub fn urls(&self) -> StreamUrlBuilder {
        StreamUrlBuilder::new(self.config.endpoints.clone())
    }

    /// Submits `file`, or each of its parts in order, and returns the keys.
    ///
    /// Any failure is logged and yields no keys at all; a part the store
    /// declines is only left out.
    pub async fn admit(&self, file: &FileBlob) -> Vec<FileKey> {
        match self.try_admit(file).await {
            Ok(keys) => keys,
            Err(e) => {
                error!("Failed to admit file {}: {}", file.name, e);
                Vec::new()
            }
        }
    }

    pub async fn try_admit(&self, file: &FileBlob) -> Result<Vec<FileKey>> {
        self.config.validate()?;

        if file.size() <= self.config.ceiling {
            return Ok(self.submit_part(file.clone()).await?.into_iter().collect());
        }

        info!("Splitting file {} ({} bytes) into chunks", file.name, file.size());
        let parts = chunk::split(file, self.config.max_chunk_size)?;

        let mut keys = Vec::with_capacity(parts.len());
        if self.config.concurrency <= 1 {
            for part in parts {
                if let Some(key) = self.submit_part(part).await? {
                    keys.push(key);
                }
            }
        } else {
            // `buffered` yields in input order whatever order the stores finish in.
            let results: Vec<Result<Option<FileKey>>> = stream::iter(parts)
                .map(|part| self.submit_part(part))
                .buffered(self.config.concurrency)
                .collect()
                .await;
            for result in results {
                if let Some(key) = result? {
                    keys.push(key);
                }
            }
        }

        Ok(keys)
    }

    /// Admits several files at once. Keys come back grouped per file, in input order.
    pub async fn admit_all(&self, files: &[FileBlob]) -> Vec<FileKey> {
        join_all(files.iter().map(|file| self.admit(file)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Where an anchor-style download should point for `file`.
    ///
    /// The URL stays valid until passed to [`FileStore::revoke_url`].
    pub async fn save_target(&self, file: &DownloadingFile) -> Option<SaveTarget> {
        let key = file.file_key.as_ref().filter(|key| !key.is_empty())?;
        let url = self.store.resolve_url(key).await.filter(|url| !url.is_empty())?;

        let file_name = match file.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_SAVE_NAME.to_string(),
        };
        Some(SaveTarget { url, file_name })
    }

    async fn submit_part(&self, part: FileBlob) -> Result<Option<FileKey>> {
        let name = part.name.clone();
        let size = part.size();

        match self.store.submit(part).await? {
            Some(key) if !key.is_empty() => {
                debug!("Stored {} ({} bytes) as {}", name, size, key);
                Ok(Some(key))
            }
            _ => {
                warn!("Store produced no key for {}", name);
                Ok(None)
            }
        }
    }
}
