//! UI Components for the Clipload page.
//!
//! # Layout Components
//! - [`Hero`] - Title and instructions
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Video picker and submit form

mod hero;
mod upload;
mod footer;

pub use hero::*;
pub use upload::*;
pub use footer::*;
