//! Result of one upload attempt.

use serde::Serialize;
use std::fmt;

use crate::error::TransportResult;
use crate::transport::TransportResponse;

/// What happened to a submitted upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "camelCase")]
pub enum UploadOutcome {
    /// The endpoint answered with a 2xx status.
    Success,
    /// The endpoint answered with any other status; carries the status text.
    HttpFailure(String),
    /// No response was received; carries the error message.
    TransportError(String),
}

impl UploadOutcome {
    /// Map a transport result to an outcome.
    pub fn classify(result: TransportResult<TransportResponse>) -> Self {
        match result {
            Ok(response) if response.is_success() => UploadOutcome::Success,
            Ok(response) => UploadOutcome::HttpFailure(response.status_text),
            Err(e) => UploadOutcome::TransportError(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success)
    }
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadOutcome::Success => write!(f, "File uploaded successfully"),
            UploadOutcome::HttpFailure(text) => write!(f, "File upload failed: {}", text),
            UploadOutcome::TransportError(msg) => write!(f, "Error uploading file: {}", msg),
        }
    }
}
