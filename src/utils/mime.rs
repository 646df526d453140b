//! MIME type detection for uploaded attachments.

/// Guess MIME by inspecting content bytes (magic numbers).
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|kind| kind.mime_type().to_string())
}

/// Guess MIME from a file name (extension-based).
pub fn guess_mime_from_name(name: &str) -> Option<String> {
    mime_guess::from_path(name).first_raw().map(str::to_string)
}

/// Combined guess: prefer content bytes, fall back to the file name,
/// otherwise octet-stream.
pub fn guess_mime(bytes: Option<&[u8]>, name: Option<&str>) -> String {
    if let Some(bytes) = bytes
        && let Some(mime) = guess_mime_from_bytes(bytes)
    {
        return mime;
    }
    if let Some(name) = name
        && let Some(mime) = guess_mime_from_name(name)
    {
        return mime;
    }
    "application/octet-stream".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_numbers_win_over_extension() {
        // PNG header with a misleading name
        let mime = guess_mime(Some(b"\x89PNG\r\n\x1a\n...."), Some("file.jpg"));
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn extension_is_used_when_bytes_are_opaque() {
        let mime = guess_mime(Some(b"hello world"), Some("readme.txt"));
        assert_eq!(mime, "text/plain");
    }

    #[test]
    fn unknown_input_falls_back_to_octet_stream() {
        assert_eq!(guess_mime(None, None), "application/octet-stream");
        assert_eq!(
            guess_mime(Some(b"????"), Some("no-extension")),
            "application/octet-stream"
        );
    }
}
