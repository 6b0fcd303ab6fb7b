//! The network seam between the form and an HTTP client.
//!
//! The form never talks HTTP directly; it hands an [`UploadRequest`] to a
//! [`Transport`] and gets back a status line or an error. Native builds
//! use [`crate::http::HttpTransport`], the browser build uses `fetch`.

use async_trait::async_trait;

use crate::config::UPLOAD_FIELD;
use crate::error::TransportResult;
use crate::file::FileHandle;

/// A single multipart POST carrying one file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest<F: FileHandle> {
    /// Target URL.
    pub endpoint: String,
    /// Multipart part name.
    pub field: &'static str,
    /// File carried by the part (content + filename).
    pub file: F,
}

impl<F: FileHandle> UploadRequest<F> {
    pub fn new(endpoint: impl Into<String>, file: F) -> Self {
        Self {
            endpoint: endpoint.into(),
            field: UPLOAD_FIELD,
            file,
        }
    }
}

/// Status line of an HTTP response. The body is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
}

impl TransportResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }

    /// 200-299.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends an [`UploadRequest`] as `multipart/form-data`.
///
/// Implementations set no headers of their own; the content type and
/// boundary come from the body encoder. They must not retry.
#[async_trait(?Send)]
pub trait Transport<F: FileHandle> {
    async fn post_multipart(&self, request: UploadRequest<F>) -> TransportResult<TransportResponse>;
}
