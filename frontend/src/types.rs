//! Browser-side adapters for the upload form.
//!
//! - [`BrowserFile`] - DOM `File` as a [`FileHandle`]
//! - [`DomSubmit`] - `submit` event as a [`SubmitTrigger`]
//! - [`AlertNotifier`] - notices via `window.alert`

use clipload::{FileHandle, Notifier, SubmitTrigger};
use wasm_bindgen::JsValue;
use web_sys::{File, SubmitEvent};

// =============================================================================
// File Types
// =============================================================================

/// A file picked through `<input type="file">`.
///
/// Name and type are read once; the DOM getters allocate on every call.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    file: File,
    name: String,
    mime_type: String,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        let name = file.name();
        let mime_type = file.type_();
        Self { file, name, mime_type }
    }

    /// Underlying blob, for `FormData`.
    pub fn file(&self) -> &File {
        &self.file
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn size(&self) -> u64 {
        self.file.size() as u64
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// Borrowed DOM `submit` event.
pub struct DomSubmit<'a>(pub &'a SubmitEvent);

impl SubmitTrigger for DomSubmit<'_> {
    fn suppress_default(&self) {
        self.0.prevent_default();
    }
}

/// Shows notices with a blocking `alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        match shown {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("alert failed: {}", js_error(&e)),
            None => log::warn!("no window for notice: {}", message),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Readable text for a JS exception.
pub fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Text of the "selected file" line.
pub fn selected_label(name: &str) -> String {
    format!("Selected file: {}", name)
}
