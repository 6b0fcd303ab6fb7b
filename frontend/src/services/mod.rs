//! Backend communication.
//!
//! - [`upload`] - multipart upload through `fetch`

pub mod upload;

pub use upload::*;
