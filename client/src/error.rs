//! Error types for the upload flow.
//!
//! - [`FormError`] - Form-level guard failures (no selection)
//! - [`TransportError`] - Failures before any HTTP response exists
//! - [`FileError`] - Loading a file from disk (native only)
//! - [`CliError`] - Top-level command line errors
//!
//! HTTP status failures are not errors here: a response with a non-2xx
//! status is a regular [`crate::UploadOutcome::HttpFailure`].

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Form Errors
// =============================================================================

/// Errors raised by [`crate::UploadForm`] before the network phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Submit was triggered with nothing selected.
    #[error("{}", crate::config::NO_FILE_NOTICE)]
    NoFileSelected,
}

// =============================================================================
// Transport Errors
// =============================================================================

/// The request could not be built or never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Building the multipart body or request failed.
    #[error("failed to build request: {0}")]
    Build(String),

    /// Connectivity or protocol failure.
    #[error("{0}")]
    Request(String),
}

// =============================================================================
// File Errors
// =============================================================================

/// Errors while turning a path into a [`crate::LocalFile`].
#[derive(Debug, Error)]
pub enum FileError {
    /// Failed to read the file.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path exists but is not a regular file.
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Path has no usable file name component.
    #[error("path has no file name: {}", .0.display())]
    MissingName(PathBuf),
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level errors for the `clipload` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Form(#[from] FormError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("File error: {0}")]
    File(#[from] FileError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upload ran but did not succeed.
    #[error("{0}")]
    UploadFailed(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type FormResult<T> = Result<T, FormError>;

pub type TransportResult<T> = Result<T, TransportError>;

pub type FileResult<T> = Result<T, FileError>;

pub type CliResult<T> = Result<T, CliError>;
