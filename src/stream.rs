//! Addresses for the local stream and save endpoints.
//!
//! Values go into the query string verbatim.

use deunicode::deunicode;

use crate::config::StreamEndpoints;
use crate::StreamDescriptor;

#[derive(Debug, Clone, Default)]
pub struct StreamUrlBuilder {
    endpoints: StreamEndpoints,
}

impl StreamUrlBuilder {
    pub fn new(endpoints: StreamEndpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &StreamEndpoints {
        &self.endpoints
    }

    pub fn stream_url(&self, file: &StreamDescriptor) -> String {
        format!(
            "{}?fileKey={}&fileSize={}&fileType={}",
            self.endpoints.stream_path,
            file.key(),
            file.size,
            file.mime_type
        )
    }

    pub fn save_stream_url(&self, file: &StreamDescriptor) -> String {
        format!(
            "{}?fileKey={}&fileName={}&fileSize={}&fileType={}",
            self.endpoints.save_path,
            file.key(),
            transliterate(file.name.as_deref().unwrap_or_default()),
            file.size,
            file.mime_type
        )
    }
}

/// Maps non-Latin text to its closest ASCII spelling.
pub fn transliterate(name: &str) -> String {
    deunicode(name)
}

pub fn stream_url(file: &StreamDescriptor) -> String {
    StreamUrlBuilder::default().stream_url(file)
}

pub fn save_stream_url(file: &StreamDescriptor) -> String {
    StreamUrlBuilder::default().save_stream_url(file)
}
