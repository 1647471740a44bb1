use serde::{Deserialize, Serialize};
use super::FileKey;

/// What the stream endpoints need to locate an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub id: String,
    pub size: u64,
    pub mime_type: String,
    pub name: Option<String>,
}

impl StreamDescriptor {
    pub fn new(id: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size,
            mime_type: mime_type.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn key(&self) -> FileKey {
        FileKey::remote(&self.id, self.size)
    }
}

/// A file the user asked to save from the local store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadingFile {
    pub file_key: Option<FileKey>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTarget {
    pub url: String,
    pub file_name: String,
}
