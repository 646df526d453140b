//! Inline file attachments.

use std::path::Path;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::utils::mime;

/// An uploaded file, encoded into a self-describing inline representation.
///
/// `data_url` is a `data:<mime>;base64,<payload>` URI and is non-empty once
/// construction completes; the original file name and byte size are kept
/// verbatim for display. The id is unique within a message and never enters
/// the wire payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    /// Unique id within the owning message
    pub id: String,
    /// Original file name
    pub name: String,
    /// Detected MIME type
    pub mime_type: String,
    /// Original size in bytes
    pub size_bytes: u64,
    /// Inline `data:` URI with base64 payload
    pub data_url: String,
}

impl Attachment {
    /// Encodes raw file content into an attachment.
    ///
    /// MIME detection prefers content magic numbers and falls back to the
    /// file name extension.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let name = name.into();
        let mime_type = mime::guess_mime(Some(bytes), Some(&name));
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            data_url: format!("data:{mime_type};base64,{encoded}"),
            size_bytes: bytes.len() as u64,
            name,
            mime_type,
        }
    }

    /// Reads and encodes a file from disk.
    ///
    /// Fails with [`LlmError::EncodingError`] when the file cannot be read;
    /// the caller decides whether to drop the attachment or abort the send.
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, LlmError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| LlmError::EncodingError(format!("{}: {err}", path.display())))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();
        Ok(Self::from_bytes(name, &bytes))
    }

    /// Whether the detected MIME type is an image type.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n_payload_";

    #[test]
    fn from_bytes_builds_data_url() {
        let att = Attachment::from_bytes("photo.png", PNG_MAGIC);
        assert_eq!(att.name, "photo.png");
        assert_eq!(att.mime_type, "image/png");
        assert_eq!(att.size_bytes, PNG_MAGIC.len() as u64);
        assert!(att.data_url.starts_with("data:image/png;base64,"));
        assert!(att.is_image());
        assert!(!att.id.is_empty());
    }

    #[test]
    fn extension_fallback_when_content_is_unrecognized() {
        let att = Attachment::from_bytes("notes.txt", b"plain words");
        assert_eq!(att.mime_type, "text/plain");
        assert!(!att.is_image());
    }

    #[tokio::test]
    async fn read_preserves_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        tokio::fs::write(&path, PNG_MAGIC).await.unwrap();

        let att = Attachment::read(&path).await.unwrap();
        assert_eq!(att.name, "pic.png");
        assert_eq!(att.size_bytes, PNG_MAGIC.len() as u64);
        assert!(att.data_url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn read_missing_file_is_encoding_error() {
        let err = Attachment::read("/nonexistent/definitely-missing.bin")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EncodingError(_)));
    }
}
