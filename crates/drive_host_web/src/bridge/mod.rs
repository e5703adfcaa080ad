//! Browser capability bridge implementations for `drive_host_web` service adapters.
//!
//! This module is organized by host domain (`http`, `upload`, `page`) while preserving a stable
//! crate-internal API for the adapters in `api`, `upload`, and `config`.

mod http;
mod interop;
mod page;
mod upload;

use drive_host::{DriveApiError, ProgressCallback};
use serde::de::DeserializeOwned;

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, DriveApiError> {
    http::fetch_json(url).await
}

pub async fn upload_file(
    url: &str,
    file: &web_sys::File,
    on_progress: ProgressCallback,
) -> Result<u16, DriveApiError> {
    upload::upload_file(url, file, on_progress).await
}

pub fn location_pathname() -> Option<String> {
    page::location_pathname()
}

pub fn meta_content(name: &str) -> Option<String> {
    page::meta_content(name)
}

#[cfg(test)]
mod tests {
    use drive_host::DirectoryEntry;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn http_public_api_non_wasm_parity() {
        assert_eq!(
            block_on(fetch_json::<Vec<DirectoryEntry>>("/api/list-files?path="))
                .expect_err("fetch should fail"),
            DriveApiError::Unsupported(
                "browser fetch is only available when compiled for wasm32".to_string()
            )
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn page_public_api_non_wasm_parity() {
        assert_eq!(location_pathname(), None);
        assert_eq!(meta_content("drive-config"), None);
    }
}
