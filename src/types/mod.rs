mod chunk;
mod file;
mod key;
mod metadata;

pub use chunk::ChunkPart;
pub use file::{detect_mime_type, FileBlob};
pub use key::{local_key, remote_key, FileKey};
pub use metadata::{DownloadingFile, SaveTarget, StreamDescriptor};
