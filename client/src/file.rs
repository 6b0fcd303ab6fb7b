//! File handles chosen by the user.
//!
//! [`FileHandle`] abstracts over whatever the host platform hands back
//! from its file picker: an in-memory [`LocalFile`] natively, a DOM
//! `File` in the browser.

use bytes::Bytes;

/// Fallback MIME type when nothing better is known.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Opaque reference to a user-selected blob plus its metadata.
pub trait FileHandle: Clone + 'static {
    /// Original file name, sent as the multipart filename.
    fn name(&self) -> &str;

    /// MIME type reported by the platform (may be empty in browsers).
    fn mime_type(&self) -> &str;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Whether the file matches the picker's `video/*` hint.
    ///
    /// Informational only; selection and upload never depend on it.
    fn is_video_hint(&self) -> bool {
        self.mime_type().starts_with("video/")
    }
}

/// A file held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    name: String,
    mime_type: String,
    content: Bytes,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    /// Cheap clone of the file content.
    pub fn content(&self) -> Bytes {
        self.content.clone()
    }
}

impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use super::{LocalFile, OCTET_STREAM};
    use crate::error::{FileError, FileResult};

    impl LocalFile {
        /// Read a file from disk.
        ///
        /// The name comes from the last path component, the MIME type is
        /// guessed from the extension.
        pub async fn from_path(path: impl AsRef<Path>) -> FileResult<Self> {
            let path = path.as_ref();
            let io_err = |source| FileError::Io {
                path: path.to_path_buf(),
                source,
            };

            let metadata = tokio::fs::metadata(path).await.map_err(io_err)?;
            if !metadata.is_file() {
                return Err(FileError::NotAFile(path.to_path_buf()));
            }

            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| FileError::MissingName(path.to_path_buf()))?
                .to_string();

            let mime_type = mime_guess::from_path(path)
                .first()
                .map(|m| m.essence_str().to_string())
                .unwrap_or_else(|| OCTET_STREAM.to_string());

            let content = tokio::fs::read(path).await.map_err(io_err)?;

            log::debug!("Loaded {} ({} bytes, {})", name, content.len(), mime_type);

            Ok(Self::new(name, mime_type, content))
        }
    }
}
