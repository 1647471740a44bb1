#[cfg(test)]
mod tests {
    use file_parts::stream::transliterate;
    use file_parts::{
        save_stream_url, stream_url, StreamDescriptor, StreamEndpoints, StreamUrlBuilder,
        UploaderConfig,
    };

    #[test]
    fn test_stream_url() {
        let file = StreamDescriptor::new("abc", 10, "video/mp4");
        assert_eq!(file.key().as_str(), "abc-10");
        assert_eq!(
            stream_url(&file),
            "/sw/stream?fileKey=abc-10&fileSize=10&fileType=video/mp4"
        );
    }

    #[test]
    fn test_save_stream_url_transliterates_name() {
        let file = StreamDescriptor::new("f1", 2048, "application/pdf").with_name("Résumé Привет.pdf");
        assert_eq!(
            save_stream_url(&file),
            "/sw/save?fileKey=f1-2048&fileName=Resume Privet.pdf&fileSize=2048&fileType=application/pdf"
        );
    }

    #[test]
    fn test_save_stream_url_without_name() {
        let file = StreamDescriptor::new("f1", 1, "");
        assert_eq!(
            save_stream_url(&file),
            "/sw/save?fileKey=f1-1&fileName=&fileSize=1&fileType="
        );
    }

    #[test]
    fn test_custom_endpoints() {
        let endpoints = StreamEndpoints {
            stream_path: "/proxy/read".to_string(),
            save_path: "/proxy/write".to_string(),
        };
        let urls = StreamUrlBuilder::new(endpoints.clone());
        let file = StreamDescriptor::new("id", 5, "text/plain").with_name("a.txt");

        assert!(urls.stream_url(&file).starts_with("/proxy/read?fileKey=id-5&"));
        assert!(urls.save_stream_url(&file).starts_with("/proxy/write?fileKey=id-5&fileName=a.txt&"));

        let config = UploaderConfig::default().with_endpoints(endpoints);
        assert_eq!(config.endpoints.save_path, "/proxy/write");
    }

    #[test]
    fn test_transliterate_keeps_ascii() {
        assert_eq!(transliterate("plain-name_01.txt"), "plain-name_01.txt");
        assert_eq!(transliterate("café"), "cafe");
    }
}
