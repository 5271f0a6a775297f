//! Dropped-file model.
//!
//! [`DroppedFile`] is the owned result of a successful intake: the
//! file's name, the MIME type the browser reported (possibly empty),
//! and the raw bytes.  Construction from a browser file handle goes
//! through [`DroppedFile::read`].

use std::fmt;

use dioxus::html::FileData;

/// Errors that can occur while reading a dropped or picked file.
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    /// The browser file engine failed to deliver the bytes.
    #[error("failed to read file: {0}")]
    Read(String),
}

/// One accepted file: name, reported MIME type, and raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct DroppedFile {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl DroppedFile {
    /// Build a file from already-known parts.
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a browser file handle into an owned [`DroppedFile`].
    ///
    /// The MIME type is whatever the browser reports; files it cannot
    /// classify get an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`FileReadError::Read`] if the file engine fails to
    /// deliver the bytes (e.g., the file was removed between drop and
    /// read).
    #[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
    pub async fn read(file: &FileData) -> Result<Self, FileReadError> {
        let name = file.name();
        let mime = file.content_type().unwrap_or_default();
        let bytes = file
            .read_bytes()
            .await
            .map_err(|e| FileReadError::Read(format!("{e}")))?;
        Ok(Self {
            name,
            mime,
            bytes: bytes.to_vec(),
        })
    }

    /// The filename as reported by the browser.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reported MIME type; empty when the browser had none.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The raw file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Filename without its last extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(base, _)| base)
    }

    /// Last filename extension, if there is one.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Borrow the bytes as text, when they are valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Consume the file, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Debug for DroppedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Skip the byte buffer; it can be megabytes.
        f.debug_struct("DroppedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_last_extension_only() {
        let file = DroppedFile::new("archive.tar.gz", "", Vec::new());
        assert_eq!(file.stem(), "archive.tar");
        assert_eq!(file.extension(), Some("gz"));
    }

    #[test]
    fn name_without_dot_has_no_extension() {
        let file = DroppedFile::new("README", "", Vec::new());
        assert_eq!(file.stem(), "README");
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn trailing_dot_yields_no_extension() {
        let file = DroppedFile::new("notes.", "", Vec::new());
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn text_requires_valid_utf8() {
        let utf8 = DroppedFile::new("a.txt", "text/plain", b"hello".to_vec());
        assert_eq!(utf8.text(), Some("hello"));

        let binary = DroppedFile::new("a.bin", "", vec![0xff, 0xfe, 0x00]);
        assert_eq!(binary.text(), None);
    }

    #[test]
    fn len_tracks_byte_count() {
        let file = DroppedFile::new("a.bin", "", vec![1, 2, 3]);
        assert_eq!(file.len(), 3);
        assert!(!file.is_empty());
        assert_eq!(file.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn debug_omits_bytes() {
        let file = DroppedFile::new("a.bin", "application/octet-stream", vec![0; 1024]);
        let repr = format!("{file:?}");
        assert!(repr.contains("\"a.bin\""), "debug should include the name");
        assert!(repr.contains("1024"), "debug should include the length");
    }
}
