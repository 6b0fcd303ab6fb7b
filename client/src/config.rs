//! Application configuration.
//!
//! Centralized configuration for the upload form. The endpoint is fixed;
//! the native build may override it from the environment (or a `.env`
//! file) for local setups where the processing server listens elsewhere.

/// Processing endpoint that receives the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "http://localhost:8000/file/uploadAndProcess";

/// Name of the single multipart part carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Accept hint for the file picker. Not enforced anywhere.
pub const VIDEO_ACCEPT: &str = "video/*";

/// Notice shown when a submission is attempted without a selection.
pub const NO_FILE_NOTICE: &str = "Please select a file to upload.";

/// Environment variable overriding [`UPLOAD_ENDPOINT`] (native only).
pub const ENDPOINT_ENV: &str = "CLIPLOAD_ENDPOINT";

/// Runtime configuration for an [`crate::UploadForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL the multipart POST is sent to.
    pub endpoint: String,
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `.env` if present, then honours `CLIPLOAD_ENDPOINT`.
    /// Blank values fall back to the fixed endpoint.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_override(std::env::var(ENDPOINT_ENV).ok())
    }

    /// Use `value` unless it is missing or blank.
    pub fn from_override(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(endpoint) if !endpoint.is_empty() => Self { endpoint },
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_endpoint(UPLOAD_ENDPOINT)
    }
}
