//! HTTP transport for uploading a picked file with `fetch`.

use async_trait::async_trait;
use clipload::{FileHandle, Transport, TransportError, TransportResponse, TransportResult, UploadRequest};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::types::{js_error, BrowserFile};

/// Posts `FormData` with gloo-net. The browser picks the boundary.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Transport<BrowserFile> for FetchTransport {
    async fn post_multipart(&self, request: UploadRequest<BrowserFile>) -> TransportResult<TransportResponse> {
        let form_data = FormData::new()
            .map_err(|e| TransportError::Build(format!("Failed to create FormData: {}", js_error(&e))))?;

        form_data
            .append_with_blob_and_filename(request.field, request.file.file(), request.file.name())
            .map_err(|e| TransportError::Build(format!("Failed to append file: {}", js_error(&e))))?;

        let response = Request::post(&request.endpoint)
            .body(form_data)
            .map_err(|e| TransportError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(TransportResponse::new(response.status(), response.status_text()))
    }
}
