//! The upload form: one selected file, two handlers.
//!
//! ```text
//!  {NoFile} --on_file_chosen--> {HasFile} --on_file_chosen--> {HasFile}
//!     |                            |
//!  on_submit                    on_submit
//!     v                            v
//!  notice, no I/O         POST multipart, log outcome, stay {HasFile}
//! ```
//!
//! Submission is split in two phases. [`UploadForm::begin_submit`] runs
//! synchronously (default-action suppression, guard, request build) so a
//! DOM handler can call it while the event is still being dispatched;
//! [`PendingUpload::send`] is the network phase. [`UploadForm::on_submit`]
//! runs both.
//!
//! Nothing prevents overlapping submissions, and the selection is kept
//! after every attempt.

use std::rc::Rc;

use crate::config::{ClientConfig, NO_FILE_NOTICE, VIDEO_ACCEPT};
use crate::error::{FormError, FormResult};
use crate::file::FileHandle;
use crate::outcome::UploadOutcome;
use crate::store::SelectionStore;
use crate::transport::{Transport, UploadRequest};

// =============================================================================
// Event seams
// =============================================================================

/// The submit trigger delivered by the UI layer.
pub trait SubmitTrigger {
    /// Stop the platform's default form submission (navigation).
    fn suppress_default(&self);
}

/// Blocking user-facing notice (an `alert` in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Submit trigger for non-DOM front ends. Records whether the default
/// action was suppressed.
#[derive(Debug, Default)]
pub struct SubmitSignal {
    suppressed: std::cell::Cell<bool>,
}

impl SubmitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_suppressed(&self) -> bool {
        self.suppressed.get()
    }
}

impl SubmitTrigger for SubmitSignal {
    fn suppress_default(&self) {
        self.suppressed.set(true);
    }
}

/// Prints notices to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

// =============================================================================
// Upload Form
// =============================================================================

/// Owns the selection and turns submit triggers into uploads.
pub struct UploadForm<F: FileHandle> {
    config: ClientConfig,
    store: SelectionStore<F>,
    transport: Rc<dyn Transport<F>>,
    notifier: Rc<dyn Notifier>,
}

impl<F: FileHandle> UploadForm<F> {
    pub fn new(config: ClientConfig, transport: Rc<dyn Transport<F>>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            config,
            store: SelectionStore::new(),
            transport,
            notifier,
        }
    }

    /// The selection store, for render layers to subscribe to.
    pub fn store(&self) -> &SelectionStore<F> {
        &self.store
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Replace the selection. Never fails and never validates.
    pub fn on_file_chosen(&self, file: F) {
        if !file.is_video_hint() {
            log::warn!(
                "{} ({}) does not match {}; keeping it anyway",
                file.name(),
                file.mime_type(),
                VIDEO_ACCEPT
            );
        }
        log::debug!("Selected {} ({} bytes)", file.name(), file.size());
        self.store.set(Some(file));
    }

    /// Handle a picker selection list. Only the first entry is used;
    /// an empty list leaves the selection untouched.
    pub fn on_files_chosen(&self, files: impl IntoIterator<Item = F>) {
        if let Some(file) = files.into_iter().next() {
            self.on_file_chosen(file);
        }
    }

    /// Synchronous phase of a submission.
    ///
    /// Always suppresses the default action first. Without a selection the
    /// notice is shown and no request is built.
    pub fn begin_submit(&self, trigger: &dyn SubmitTrigger) -> FormResult<PendingUpload<F>> {
        trigger.suppress_default();

        let Some(file) = self.store.get() else {
            log::info!("Submit without a selected file");
            self.notifier.notify(NO_FILE_NOTICE);
            return Err(FormError::NoFileSelected);
        };

        log::info!("📤 Uploading {} to {}", file.name(), self.config.endpoint);

        Ok(PendingUpload {
            transport: Rc::clone(&self.transport),
            request: UploadRequest::new(self.config.endpoint.clone(), file),
        })
    }

    /// Full submission: guard, one POST, logged outcome.
    pub async fn on_submit(&self, trigger: &dyn SubmitTrigger) -> FormResult<UploadOutcome> {
        let pending = self.begin_submit(trigger)?;
        Ok(pending.send().await)
    }
}

impl<F: FileHandle> Clone for UploadForm<F> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            store: self.store.clone(),
            transport: Rc::clone(&self.transport),
            notifier: Rc::clone(&self.notifier),
        }
    }
}

/// A built request waiting for its network phase.
pub struct PendingUpload<F: FileHandle> {
    transport: Rc<dyn Transport<F>>,
    request: UploadRequest<F>,
}

impl<F: FileHandle> PendingUpload<F> {
    pub fn request(&self) -> &UploadRequest<F> {
        &self.request
    }

    /// Send the request once and log the outcome. No retry.
    pub async fn send(self) -> UploadOutcome {
        let name = self.request.file.name().to_string();
        let result = self.transport.post_multipart(self.request).await;
        let outcome = UploadOutcome::classify(result);

        match &outcome {
            UploadOutcome::Success => log::info!("✅ {} ({})", outcome, name),
            UploadOutcome::HttpFailure(_) => log::warn!("❌ {} ({})", outcome, name),
            UploadOutcome::TransportError(_) => log::error!("❌ {} ({})", outcome, name),
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TransportError, TransportResult};
    use crate::file::LocalFile;
    use crate::transport::TransportResponse;
    use async_trait::async_trait;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::OnceLock;

    /// Records every request and answers with a fixed reply.
    struct MockTransport {
        calls: RefCell<Vec<UploadRequest<LocalFile>>>,
        reply: TransportResult<TransportResponse>,
    }

    impl MockTransport {
        fn replying(reply: TransportResult<TransportResponse>) -> Rc<Self> {
            Rc::new(Self {
                calls: RefCell::new(Vec::new()),
                reply,
            })
        }

        fn status(status: u16, text: &str) -> Rc<Self> {
            Self::replying(Ok(TransportResponse::new(status, text)))
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Transport<LocalFile> for MockTransport {
        async fn post_multipart(&self, request: UploadRequest<LocalFile>) -> TransportResult<TransportResponse> {
            self.calls.borrow_mut().push(request);
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    fn clip() -> LocalFile {
        LocalFile::new("clip.mp4", "video/mp4", vec![0xAB; 1024])
    }

    fn form_with(transport: Rc<MockTransport>) -> (UploadForm<LocalFile>, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let form = UploadForm::<LocalFile>::new(ClientConfig::default(), transport, notifier.clone());
        (form, notifier)
    }

    #[test]
    fn test_selection_last_write_wins() {
        let (form, _) = form_with(MockTransport::status(200, "OK"));
        form.on_file_chosen(LocalFile::new("a.mp4", "video/mp4", "a"));
        form.on_file_chosen(LocalFile::new("b.mov", "video/quicktime", "b"));
        form.on_file_chosen(clip());
        assert_eq!(form.store().get(), Some(clip()));
    }

    #[test]
    fn test_non_video_still_selected() {
        let (form, _) = form_with(MockTransport::status(200, "OK"));
        form.on_file_chosen(LocalFile::new("notes.txt", "text/plain", "hi"));
        assert_eq!(form.store().selected_name().as_deref(), Some("notes.txt"));
    }

    #[test]
    fn test_first_of_many_and_empty_selection() {
        let (form, _) = form_with(MockTransport::status(200, "OK"));

        form.on_files_chosen(Vec::new());
        assert!(!form.store().is_selected());

        form.on_files_chosen(vec![clip(), LocalFile::new("second.mp4", "video/mp4", "x")]);
        assert_eq!(form.store().selected_name().as_deref(), Some("clip.mp4"));

        form.on_files_chosen(Vec::new());
        assert_eq!(form.store().selected_name().as_deref(), Some("clip.mp4"));
    }

    #[tokio::test]
    async fn test_submit_without_file() {
        let transport = MockTransport::status(200, "OK");
        let (form, notifier) = form_with(transport.clone());
        let trigger = SubmitSignal::new();

        let result = form.on_submit(&trigger).await;

        assert_eq!(result, Err(FormError::NoFileSelected));
        assert!(trigger.default_suppressed());
        assert_eq!(*notifier.notices.borrow(), vec!["Please select a file to upload.".to_string()]);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let transport = MockTransport::status(200, "OK");
        let (form, notifier) = form_with(transport.clone());
        form.on_file_chosen(clip());
        let trigger = SubmitSignal::new();

        let outcome = form.on_submit(&trigger).await.unwrap();

        assert_eq!(outcome, UploadOutcome::Success);
        assert!(trigger.default_suppressed());
        assert!(notifier.notices.borrow().is_empty());

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].endpoint, "http://localhost:8000/file/uploadAndProcess");
        assert_eq!(calls[0].field, "file");
        assert_eq!(calls[0].file, clip());
    }

    #[tokio::test]
    async fn test_submit_http_failure() {
        let transport = MockTransport::status(500, "Internal Server Error");
        let (form, notifier) = form_with(transport.clone());
        form.on_file_chosen(clip());

        let outcome = form.on_submit(&SubmitSignal::new()).await.unwrap();

        assert_eq!(outcome, UploadOutcome::HttpFailure("Internal Server Error".into()));
        assert!(notifier.notices.borrow().is_empty());
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_transport_error() {
        let transport = MockTransport::replying(Err(TransportError::Request("network down".into())));
        let (form, _) = form_with(transport.clone());
        form.on_file_chosen(clip());

        let outcome = form.on_submit(&SubmitSignal::new()).await.unwrap();

        assert_eq!(outcome, UploadOutcome::TransportError("network down".into()));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_selection_kept_after_submit() {
        let (form, _) = form_with(MockTransport::status(500, "Internal Server Error"));
        form.on_file_chosen(clip());
        let _ = form.on_submit(&SubmitSignal::new()).await;
        assert_eq!(form.store().get(), Some(clip()));
    }

    #[tokio::test]
    async fn test_overlapping_submissions_each_send() {
        let transport = MockTransport::status(200, "OK");
        let (form, _) = form_with(transport.clone());
        form.on_file_chosen(clip());

        let (a, b) = (SubmitSignal::new(), SubmitSignal::new());
        let (first, second) = futures::join!(form.on_submit(&a), form.on_submit(&b));

        assert_eq!(first, Ok(UploadOutcome::Success));
        assert_eq!(second, Ok(UploadOutcome::Success));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_begin_submit_is_synchronous() {
        let transport = MockTransport::status(200, "OK");
        let (form, _) = form_with(transport.clone());
        form.on_file_chosen(clip());
        let trigger = SubmitSignal::new();

        let pending = form.begin_submit(&trigger).unwrap();
        assert!(trigger.default_suppressed());
        assert_eq!(pending.request().file.name(), "clip.mp4");
        assert_eq!(transport.call_count(), 0);

        assert_eq!(pending.send().await, UploadOutcome::Success);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_custom_endpoint() {
        let transport = MockTransport::status(201, "Created");
        let notifier = Rc::new(RecordingNotifier::default());
        let form = UploadForm::<LocalFile>::new(ClientConfig::with_endpoint("http://10.0.0.2:8000/up"), transport.clone(), notifier);
        form.on_file_chosen(clip());

        assert_eq!(form.endpoint(), "http://10.0.0.2:8000/up");
        assert_eq!(form.on_submit(&SubmitSignal::new()).await, Ok(UploadOutcome::Success));
        assert_eq!(transport.calls.borrow()[0].endpoint, "http://10.0.0.2:8000/up");
    }

    // =========================================================================
    // Logged outcomes
    // =========================================================================

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    /// Collects records per thread; each `#[tokio::test]` runs on its own.
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INSTALLED: OnceLock<()> = OnceLock::new();

    fn start_capture() {
        INSTALLED.get_or_init(|| {
            log::set_logger(&LOGGER).expect("no other logger in tests");
            log::set_max_level(LevelFilter::Trace);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
    }

    fn captured() -> Vec<(Level, String)> {
        CAPTURED.with(|c| c.borrow().clone())
    }

    /// Logs emitted by the network phase alone.
    async fn send_logs(reply: TransportResult<TransportResponse>) -> Vec<(Level, String)> {
        let (form, _) = form_with(MockTransport::replying(reply));
        form.on_file_chosen(clip());
        let pending = form.begin_submit(&SubmitSignal::new()).unwrap();

        start_capture();
        pending.send().await;
        captured()
    }

    #[tokio::test]
    async fn test_success_is_logged_once_at_info() {
        let logs = send_logs(Ok(TransportResponse::new(200, "OK"))).await;

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, Level::Info);
        assert!(logs[0].1.contains("File uploaded successfully"));
        assert!(logs[0].1.contains("clip.mp4"));
    }

    #[tokio::test]
    async fn test_http_failure_is_logged_with_status_text() {
        let logs = send_logs(Ok(TransportResponse::new(500, "Internal Server Error"))).await;

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, Level::Warn);
        assert!(logs[0].1.contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_transport_error_is_logged_with_message() {
        let logs = send_logs(Err(TransportError::Request("network down".into()))).await;

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, Level::Error);
        assert!(logs[0].1.contains("network down"));
    }

    #[tokio::test]
    async fn test_each_attempt_logs_its_own_outcome() {
        let (form, _) = form_with(MockTransport::status(500, "Internal Server Error"));
        form.on_file_chosen(clip());

        start_capture();
        let _ = form.on_submit(&SubmitSignal::new()).await;
        let _ = form.on_submit(&SubmitSignal::new()).await;

        let failures: Vec<_> = captured().into_iter().filter(|(level, _)| *level == Level::Warn).collect();
        assert_eq!(failures.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_logs_no_outcome() {
        let (form, _) = form_with(MockTransport::status(200, "OK"));

        start_capture();
        let _ = form.on_submit(&SubmitSignal::new()).await;

        let logs = captured();
        assert!(logs.iter().all(|(level, _)| *level == Level::Info));
        assert!(logs.iter().all(|(_, msg)| !msg.contains("uploaded") && !msg.contains("failed")));
    }
}
