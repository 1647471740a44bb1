use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token addressing file content inside a [`FileStore`](crate::storage::store::FileStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileKey(pub String);

impl FileKey {
    /// Key for a file that only exists client side: `name-type-lastModified-size`.
    ///
    /// Two distinct files sharing all four fields collide. That is accepted.
    pub fn local(name: &str, mime_type: &str, last_modified: i64, size: u64) -> Self {
        Self(format!("{}-{}-{}-{}", name, mime_type, last_modified, size))
    }

    /// Key for a file the backend knows about: `id-size`.
    pub fn remote(id: &str, size: u64) -> Self {
        Self(format!("{}-{}", id, size))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FileKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for FileKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for FileKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FileKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

pub fn local_key(name: &str, mime_type: &str, last_modified: i64, size: u64) -> FileKey {
    FileKey::local(name, mime_type, last_modified, size)
}

pub fn remote_key(id: &str, size: u64) -> FileKey {
    FileKey::remote(id, size)
}
