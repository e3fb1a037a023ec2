//! Stream URL helpers

/// Guess the MIME type of a stream from its URL extension
///
/// Query strings are ignored. Returns `None` for unknown extensions.
pub fn find_mime_type(url: &str) -> Option<&'static str> {
    let lower = url.to_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or("");
    let file = path.rsplit('/').next().unwrap_or("");
    let (_, ext) = file.rsplit_once('.')?;

    match ext {
        "pls" => Some("audio/x-scpls"),
        "m3u" => Some("audio/x-mpegurl"),
        "m3u8" => Some("application/vnd.apple.mpegurl"),
        "mp3" => Some("audio/mpeg"),
        "aac" => Some("audio/aac"),
        "ogg" => Some("audio/ogg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_types() {
        assert_eq!(
            find_mime_type("http://www.abc.net.au/res/streaming/audio/mp3/triplej.pls"),
            Some("audio/x-scpls")
        );
        assert_eq!(
            find_mime_type("http://example.com/live.M3U8?token=abc"),
            Some("application/vnd.apple.mpegurl")
        );
        assert_eq!(find_mime_type("http://example.com/a.m3u"), Some("audio/x-mpegurl"));
    }

    #[test]
    fn test_direct_streams() {
        assert_eq!(find_mime_type("http://example.com/stream.mp3"), Some("audio/mpeg"));
        assert_eq!(find_mime_type("http://example.com/stream.aac"), Some("audio/aac"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(find_mime_type("http://example.com/stream"), None);
        assert_eq!(find_mime_type("http://example.com.au/listen"), None);
        assert_eq!(find_mime_type(""), None);
    }
}
