//! Typed drive contracts and shared models used across view-models and browser adapters.
//!
//! This crate is the API-first boundary for the file-server backend. It exposes the wire models
//! returned by the listing/search endpoints, the `/files` URL codec, the extension-to-category
//! table, runtime configuration, and the service traits that browser adapters in
//! `drive_host_web` implement.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod fs;
pub mod upload;

pub use config::{DriveConfig, DRIVE_CONFIG_META_NAME};
pub use error::DriveApiError;
pub use fs::category::{file_extension, FileCategory, IMAGE_EXTENSIONS, MEDIA_EXTENSIONS};
pub use fs::path::{
    decode_component, directory_href, encode_component, encode_segments, file_href, join_path,
    parent_path, resolve_current_path, FILES_ROUTE_PREFIX, HOME_HREF,
};
pub use fs::service::{
    DriveApiService, DriveFuture, MemoryDriveApiService, NoopDriveApiService, RecordedRequest,
};
pub use fs::types::{
    DirectoryEntry, SearchQuery, SearchQueryEcho, SearchResponse, SearchResult, HIDDEN_FILE_MARKER,
};
pub use upload::{
    FileHandle, MemoryFile, MemoryUploadTransport, NoopUploadTransport, ProgressCallback,
    TransferProgress, UploadTransport,
};
