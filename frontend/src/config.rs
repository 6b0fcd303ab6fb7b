//! Application configuration.
//!
//! The browser build always talks to the fixed endpoint; only the page
//! copy lives here.

pub use clipload::config::{NO_FILE_NOTICE, UPLOAD_ENDPOINT, VIDEO_ACCEPT};

/// Page title and header text.
pub const APP_NAME: &str = "Clipload";

/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "Upload and process";
