//! Multipart upload transport contracts.

use std::{cell::RefCell, rc::Rc};

use crate::error::DriveApiError;
use crate::fs::service::DriveFuture;

/// Opaque handle to a user-selected file.
pub trait FileHandle {
    /// File name as reported by the picker or drop event.
    fn name(&self) -> String;

    /// File size in bytes.
    fn size_bytes(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Byte-level progress reported while a request body is being sent.
pub struct TransferProgress {
    /// Bytes sent so far.
    pub loaded: u64,
    /// Total body size, or `None` when the length is not computable.
    pub total: Option<u64>,
}

/// Callback invoked for every upload progress event.
pub type ProgressCallback = Box<dyn FnMut(TransferProgress)>;

/// Transport that sends one file as a multipart form (field `file`) and reports progress.
pub trait UploadTransport {
    /// File handle type accepted by this transport.
    type File: FileHandle;

    /// Sends `file` to `url` and resolves with the HTTP status once the response has loaded.
    fn upload<'a>(
        &'a self,
        url: &'a str,
        file: &'a Self::File,
        on_progress: ProgressCallback,
    ) -> DriveFuture<'a, Result<u16, DriveApiError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-memory file handle for tests and non-browser hosts.
pub struct MemoryFile {
    /// File name.
    pub name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl MemoryFile {
    /// Creates a memory file.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op upload transport for unsupported targets and stubbed builds.
pub struct NoopUploadTransport;

impl UploadTransport for NoopUploadTransport {
    type File = MemoryFile;

    fn upload<'a>(
        &'a self,
        _url: &'a str,
        _file: &'a Self::File,
        _on_progress: ProgressCallback,
    ) -> DriveFuture<'a, Result<u16, DriveApiError>> {
        Box::pin(async { Err(DriveApiError::Unsupported("upload".to_string())) })
    }
}

#[derive(Debug, Clone)]
/// In-memory upload transport that replays scripted progress steps and a fixed outcome.
///
/// With no scripted steps the whole body is reported in one chunk. Each upload is recorded as
/// `(url, file name)`.
pub struct MemoryUploadTransport {
    chunk_sizes: Vec<u64>,
    outcome: Result<u16, DriveApiError>,
    uploads: Rc<RefCell<Vec<(String, String)>>>,
}

impl Default for MemoryUploadTransport {
    fn default() -> Self {
        Self::with_outcome(Ok(200))
    }
}

impl MemoryUploadTransport {
    /// Creates a transport resolving with `outcome`.
    pub fn with_outcome(outcome: Result<u16, DriveApiError>) -> Self {
        Self {
            chunk_sizes: Vec::new(),
            outcome,
            uploads: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Sends the body in chunks of the given sizes (the final chunk is clamped to the file size).
    pub fn chunked(mut self, chunk_sizes: Vec<u64>) -> Self {
        self.chunk_sizes = chunk_sizes;
        self
    }

    /// Returns every `(url, file name)` uploaded so far.
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.borrow().clone()
    }
}

impl UploadTransport for MemoryUploadTransport {
    type File = MemoryFile;

    fn upload<'a>(
        &'a self,
        url: &'a str,
        file: &'a Self::File,
        mut on_progress: ProgressCallback,
    ) -> DriveFuture<'a, Result<u16, DriveApiError>> {
        Box::pin(async move {
            self.uploads
                .borrow_mut()
                .push((url.to_string(), file.name.clone()));

            let total = file.size_bytes();
            let mut loaded = 0;
            for chunk in &self.chunk_sizes {
                loaded = (loaded + chunk).min(total);
                on_progress(TransferProgress {
                    loaded,
                    total: Some(total),
                });
            }
            if loaded < total || self.chunk_sizes.is_empty() {
                on_progress(TransferProgress {
                    loaded: total,
                    total: Some(total),
                });
            }
            self.outcome.clone()
        })
    }
}
