//! Browser (`wasm32`) implementations of [`drive_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the drive UI: `fetch`-backed listing
//! and search, XHR multipart uploads with progress, and readers for the page location and the
//! `<meta>` config override.
//!
//! Bridge bindings live under `bridge/`:
//! - `bridge::http` (JSON requests)
//! - `bridge::upload` (multipart transfer)
//! - `bridge::page` (location and document metadata)
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for page wiring.
pub mod adapters;
pub mod api;
mod bridge;
pub mod config;
pub mod context;
pub mod upload;

pub use adapters::{
    build_drive_services, drive_api_service, host_strategy_name, selected_host_strategy,
    upload_transport, DriveApiServiceAdapter, DriveServices, HostStrategy, UploadTransportAdapter,
};
pub use api::WebDriveApiService;
pub use config::{current_pathname, load_drive_config};
pub use context::{provide_drive_services, use_drive_services};
pub use upload::{BrowserFile, WebUploadTransport};
