//! Upload controller: file selection, progress tracking, and outcome messages.

use drive_host::{DriveApiError, FileHandle, TransferProgress, UploadTransport};
use leptos::logging;
use thiserror::Error;

use crate::cell::StateCell;

/// Validation message shown when submitting without a selected file.
pub const NO_FILE_SELECTED_MESSAGE: &str = "Please select a file first";
/// Message shown after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully!";
/// Message shown after a rejected or failed upload.
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";

const UPLOAD_OK_STATUS: u16 = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an upload was not started.
pub enum UploadError {
    /// No file has been selected.
    #[error("Please select a file first")]
    NoFileSelected,
    /// An upload is already running.
    #[error("an upload is already in progress")]
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome message of the last upload attempt.
pub enum UploadStatus {
    /// Upload accepted by the server.
    Success(String),
    /// Validation failure, non-200 status, or transport error.
    Failure(String),
}

impl UploadStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Display summary of the selected file.
pub struct SelectedFileSummary {
    /// File name.
    pub name: String,
    /// Size label, e.g. `1.50 MB`.
    pub size_label: String,
}

/// Formats a byte count as mebibytes with two decimals.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

#[derive(Debug, Clone, PartialEq)]
/// Upload page state for one page load.
pub struct UploadState<F> {
    selected: Option<F>,
    progress: Option<f64>,
    status: Option<UploadStatus>,
    drag_over: bool,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            progress: None,
            status: None,
            drag_over: false,
        }
    }
}

impl<F> UploadState<F> {
    /// Sets the pending file and clears prior status text.
    ///
    /// Click-to-browse and drag-and-drop both land here.
    pub fn select_file(&mut self, file: F) {
        self.selected = Some(file);
        self.status = None;
        self.drag_over = false;
    }

    /// Drops the pending file and clears status text.
    pub fn remove_file(&mut self) {
        self.selected = None;
        self.status = None;
    }

    pub fn set_drag_over(&mut self, drag_over: bool) {
        self.drag_over = drag_over;
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.progress.is_some()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_uploading()
    }

    /// Current progress percentage while uploading.
    pub fn progress_percent(&self) -> Option<f64> {
        self.progress
    }

    /// Progress caption while uploading, e.g. `Uploading... 42%`.
    ///
    /// Rounds down so the caption shows `100%` only once the bar does.
    pub fn progress_label(&self) -> Option<String> {
        self.progress
            .map(|percent| format!("Uploading... {}%", percent.floor() as u64))
    }

    pub fn status(&self) -> Option<&UploadStatus> {
        self.status.as_ref()
    }

    /// Starts an upload of the selected file and returns a handle to send.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::NoFileSelected`] (and shows the validation message) when nothing is
    /// selected, or [`UploadError::InProgress`] while a previous upload is running.
    pub fn begin_upload(&mut self) -> Result<F, UploadError>
    where
        F: Clone,
    {
        if self.is_uploading() {
            return Err(UploadError::InProgress);
        }
        let Some(file) = self.selected.clone() else {
            self.status = Some(UploadStatus::Failure(NO_FILE_SELECTED_MESSAGE.to_string()));
            return Err(UploadError::NoFileSelected);
        };
        self.status = None;
        self.progress = Some(0.0);
        Ok(file)
    }

    /// Records a byte-level progress event.
    ///
    /// The percentage never decreases within one upload and only reaches 100 once every byte has
    /// been sent. Events without a computable length are ignored.
    pub fn record_progress(&mut self, progress: TransferProgress) {
        let Some(current) = self.progress else {
            return;
        };
        let Some(total) = progress.total.filter(|total| *total > 0) else {
            return;
        };
        let percent = if progress.loaded >= total {
            100.0
        } else {
            (progress.loaded as f64 / total as f64 * 100.0).min(99.99)
        };
        self.progress = Some(current.max(percent));
    }

    /// Applies the upload outcome: HTTP 200 clears the selection, anything else keeps it.
    pub fn finish(&mut self, result: Result<u16, DriveApiError>) {
        self.progress = None;
        match result {
            Ok(UPLOAD_OK_STATUS) => {
                self.selected = None;
                self.status = Some(UploadStatus::Success(UPLOAD_SUCCESS_MESSAGE.to_string()));
            }
            Ok(status) => {
                logging::warn!("upload rejected with HTTP status {status}");
                self.status = Some(UploadStatus::Failure(UPLOAD_FAILED_MESSAGE.to_string()));
            }
            Err(err) => {
                logging::warn!("upload failed: {err}");
                self.status = Some(UploadStatus::Failure(UPLOAD_FAILED_MESSAGE.to_string()));
            }
        }
    }
}

impl<F: FileHandle> UploadState<F> {
    /// Name and size label of the selected file.
    pub fn selected_summary(&self) -> Option<SelectedFileSummary> {
        self.selected.as_ref().map(|file| SelectedFileSummary {
            name: file.name(),
            size_label: format_size_mb(file.size_bytes()),
        })
    }
}

/// Uploads the cell's selected file to `endpoint`, streaming progress into the cell.
///
/// # Errors
///
/// Returns the [`UploadError`] from [`UploadState::begin_upload`]; nothing is sent in that case.
pub async fn submit_upload<T, C>(transport: &T, endpoint: &str, cell: C) -> Result<(), UploadError>
where
    T: UploadTransport + ?Sized,
    T::File: Clone + 'static,
    C: StateCell<UploadState<T::File>> + Clone + 'static,
{
    let mut started = Err(UploadError::InProgress);
    cell.update_state(|state| started = state.begin_upload());
    let file = started?;

    let progress_cell = cell.clone();
    let result = transport
        .upload(
            endpoint,
            &file,
            Box::new(move |progress| {
                progress_cell.update_state(|state| state.record_progress(progress));
            }),
        )
        .await;
    cell.update_state(|state| state.finish(result));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use drive_host::{MemoryFile, MemoryUploadTransport};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct RecordingFile {
        name: &'static str,
        size: u64,
    }

    impl FileHandle for RecordingFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size_bytes(&self) -> u64 {
            self.size
        }
    }

    fn uploading(size: u64) -> UploadState<RecordingFile> {
        let mut state = UploadState::default();
        state.select_file(RecordingFile { name: "a.bin", size });
        state.begin_upload().expect("begin");
        state
    }

    fn progress(loaded: u64, total: u64) -> TransferProgress {
        TransferProgress {
            loaded,
            total: Some(total),
        }
    }

    #[test]
    fn submit_without_file_reports_validation_message() {
        let mut state = UploadState::<RecordingFile>::default();

        assert_eq!(state.begin_upload(), Err(UploadError::NoFileSelected));
        assert_eq!(
            state.status(),
            Some(&UploadStatus::Failure(NO_FILE_SELECTED_MESSAGE.to_string()))
        );
        assert!(!state.is_uploading());
    }

    #[test]
    fn select_file_clears_status_and_summarizes_size() {
        let mut state = UploadState::<RecordingFile>::default();
        state.begin_upload().expect_err("nothing selected");
        state.set_drag_over(true);

        state.select_file(RecordingFile {
            name: "movie.mkv",
            size: 1_572_864,
        });

        assert_eq!(state.status(), None);
        assert!(!state.is_drag_over());
        assert!(state.can_submit());
        assert_eq!(
            state.selected_summary(),
            Some(SelectedFileSummary {
                name: "movie.mkv".to_string(),
                size_label: "1.50 MB".to_string(),
            })
        );

        state.remove_file();
        assert_eq!(state.selected_file(), None);
        assert!(!state.can_submit());
    }

    #[test]
    fn progress_is_monotonic_and_reaches_100_only_at_completion() {
        let mut state = uploading(1000);
        let mut seen = Vec::new();
        for (loaded, total) in [(250, 1000), (100, 1000), (999, 1000), (1000, 1000)] {
            state.record_progress(progress(loaded, total));
            seen.push(state.progress_percent().expect("uploading"));
        }

        assert_eq!(seen[0], 25.0);
        assert_eq!(seen[1], 25.0);
        assert!(seen[2] < 100.0);
        assert_eq!(seen[3], 100.0);
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(state.progress_label().as_deref(), Some("Uploading... 100%"));
    }

    #[test]
    fn progress_label_stays_below_100_until_last_byte() {
        let mut state = uploading(1000);
        state.record_progress(progress(996, 1000));

        assert!(state.progress_percent().is_some_and(|percent| percent > 99.5 && percent < 100.0));
        assert_eq!(state.progress_label().as_deref(), Some("Uploading... 99%"));

        state.record_progress(progress(1000, 1000));
        assert_eq!(state.progress_label().as_deref(), Some("Uploading... 100%"));
    }

    #[test]
    fn progress_without_length_is_ignored() {
        let mut state = uploading(10);
        state.record_progress(TransferProgress {
            loaded: 5,
            total: None,
        });
        state.record_progress(progress(5, 0));
        assert_eq!(state.progress_percent(), Some(0.0));
        assert_eq!(state.progress_label().as_deref(), Some("Uploading... 0%"));
    }

    #[test]
    fn success_clears_selection_and_failure_keeps_it() {
        let mut ok = uploading(10);
        ok.finish(Ok(200));
        assert_eq!(ok.selected_file(), None);
        assert_eq!(ok.status().map(UploadStatus::is_success), Some(true));
        assert_eq!(ok.progress_percent(), None);

        let mut rejected = uploading(10);
        rejected.finish(Ok(413));
        assert!(rejected.selected_file().is_some());
        assert_eq!(
            rejected.status().map(UploadStatus::message),
            Some(UPLOAD_FAILED_MESSAGE)
        );

        let mut broken = uploading(10);
        broken.finish(Err(DriveApiError::transport("/upload", "network error")));
        assert!(!broken.is_uploading());
        assert_eq!(
            broken.status(),
            Some(&UploadStatus::Failure(UPLOAD_FAILED_MESSAGE.to_string()))
        );
    }

    #[test]
    fn second_submit_while_uploading_is_rejected() {
        let mut state = uploading(10);
        assert_eq!(state.begin_upload(), Err(UploadError::InProgress));
    }

    #[test]
    fn submit_upload_streams_progress_into_cell() {
        let transport = MemoryUploadTransport::default().chunked(vec![3, 3]);
        let cell = Rc::new(RefCell::new(UploadState::default()));
        cell.borrow_mut()
            .select_file(MemoryFile::new("notes.txt", vec![b'x'; 8]));

        block_on(submit_upload(&transport, "/upload", cell.clone())).expect("upload");

        assert_eq!(
            transport.uploads(),
            vec![("/upload".to_string(), "notes.txt".to_string())]
        );
        let state = cell.borrow();
        assert_eq!(state.selected_file(), None);
        assert_eq!(
            state.status(),
            Some(&UploadStatus::Success(UPLOAD_SUCCESS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn submit_upload_without_file_sends_nothing() {
        let transport = MemoryUploadTransport::default();
        let cell = Rc::new(RefCell::new(UploadState::<MemoryFile>::default()));

        let err = block_on(submit_upload(&transport, "/upload", cell.clone()))
            .expect_err("no file");

        assert_eq!(err, UploadError::NoFileSelected);
        assert!(transport.uploads().is_empty());
    }
}
