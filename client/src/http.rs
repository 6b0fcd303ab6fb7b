//! Native HTTP transport built on reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::error::{TransportError, TransportResult};
use crate::file::{FileHandle, LocalFile};
use crate::transport::{Transport, TransportResponse, UploadRequest};

/// Sends uploads with a shared [`reqwest::Client`].
///
/// The client keeps reqwest's defaults: no timeout, no retry.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn file_part(file: &LocalFile) -> TransportResult<Part> {
    let part = Part::stream_with_length(file.content(), file.size()).file_name(file.name().to_string());

    if file.mime_type().is_empty() {
        return Ok(part);
    }
    part.mime_str(file.mime_type())
        .map_err(|e| TransportError::Build(format!("invalid MIME type '{}': {}", file.mime_type(), e)))
}

#[async_trait(?Send)]
impl Transport<LocalFile> for HttpTransport {
    async fn post_multipart(&self, request: UploadRequest<LocalFile>) -> TransportResult<TransportResponse> {
        let form = Form::new().part(request.field, file_part(&request.file)?);

        let response = self
            .client
            .post(&request.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(TransportResponse::new(response.status().as_u16(), status_text(&response)))
    }
}

/// Reason phrase as sent by the server.
///
/// hyper only keeps the phrase when it differs from the canonical one, so
/// fall back to the canonical phrase (empty when the code has none).
fn status_text(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response.status().canonical_reason().unwrap_or_default().to_string(),
    }
}
