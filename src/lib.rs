pub mod chunk;
pub mod config;
pub mod error;
pub mod storage;
pub mod stream;
pub mod worker;

mod types;

pub use chunk::sizes::{chunk_size_for_file_size, MAX_FILE_SIZE};
pub use chunk::{plan_parts, split, split_default};
pub use config::{StreamEndpoints, UploaderConfig};
pub use error::{Result, UploadError};
pub use storage::{admission::Uploader, memory::MemoryStore, source::ByteSource, store::FileStore};
pub use stream::{save_stream_url, stream_url, StreamUrlBuilder};
pub use types::*;
