//! # Clipload - video upload form core
//!
//! Picks one video file and sends it as a single-part multipart POST to a
//! processing endpoint.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐     ┌───────────────┐
//! │ File picker │────▶│  UploadForm      │────▶│  Transport  │────▶│ /file/upload- │
//! │ (DOM / CLI) │     │  SelectionStore  │     │ (reqwest or │     │  AndProcess   │
//! └─────────────┘     └──────────────────┘     │   fetch)    │     └───────────────┘
//!                              │               └─────────────┘
//!                              ▼
//!                        UploadOutcome (logged)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use clipload::{ClientConfig, HttpTransport, LocalFile, StderrNotifier, SubmitSignal, UploadForm};
//!
//! #[tokio::main]
//! async fn main() {
//!     let form = UploadForm::new(ClientConfig::default(), Rc::new(HttpTransport::new()), Rc::new(StderrNotifier));
//!     form.on_file_chosen(LocalFile::from_path("clip.mp4").await.unwrap());
//!     let outcome = form.on_submit(&SubmitSignal::new()).await;
//!     println!("{:?}", outcome);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Endpoint and UI constants
//! - [`error`] - Error types
//! - [`file`] - File handles
//! - [`store`] - Observable selection state
//! - [`transport`] - Network seam
//! - [`form`] - Upload form handlers
//! - [`outcome`] - Upload outcome
//! - `http` - reqwest transport (native only)

// Core modules
pub mod config;
pub mod error;

// State
pub mod file;
pub mod store;

// Flow
pub mod form;
pub mod outcome;
pub mod transport;

// Native HTTP
#[cfg(not(target_arch = "wasm32"))]
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ClientConfig, ENDPOINT_ENV, NO_FILE_NOTICE, UPLOAD_ENDPOINT, UPLOAD_FIELD, VIDEO_ACCEPT};

pub use error::{
    CliError, CliResult, FileError, FileResult, FormError, FormResult, TransportError,
    TransportResult,
};

pub use file::{FileHandle, LocalFile};

pub use store::{SelectionStore, Subscription};

pub use form::{Notifier, PendingUpload, StderrNotifier, SubmitSignal, SubmitTrigger, UploadForm};

pub use outcome::UploadOutcome;

pub use transport::{Transport, TransportResponse, UploadRequest};

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;
