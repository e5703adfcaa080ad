//! Browser file handles and the XHR multipart upload transport.

use drive_host::{DriveApiError, DriveFuture, FileHandle, ProgressCallback, UploadTransport};

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file chosen through a file input or dropped onto the page.
pub struct BrowserFile(web_sys::File);

impl BrowserFile {
    /// Wraps a DOM file.
    pub fn new(file: web_sys::File) -> Self {
        Self(file)
    }

    /// First file currently selected in a file input.
    pub fn from_input(input: &web_sys::HtmlInputElement) -> Option<Self> {
        input.files()?.get(0).map(Self)
    }

    /// First file carried by a drop event.
    pub fn from_drag_event(event: &web_sys::DragEvent) -> Option<Self> {
        event.data_transfer()?.files()?.get(0).map(Self)
    }

    /// Underlying DOM file.
    pub fn as_file(&self) -> &web_sys::File {
        &self.0
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size_bytes(&self) -> u64 {
        self.0.size() as u64
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Upload transport that posts a `multipart/form-data` body through `XMLHttpRequest`, so
/// request-body progress events are observable.
pub struct WebUploadTransport;

impl UploadTransport for WebUploadTransport {
    type File = BrowserFile;

    fn upload<'a>(
        &'a self,
        url: &'a str,
        file: &'a Self::File,
        on_progress: ProgressCallback,
    ) -> DriveFuture<'a, Result<u16, DriveApiError>> {
        Box::pin(async move { bridge::upload_file(url, file.as_file(), on_progress).await })
    }
}
