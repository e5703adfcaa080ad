use std::rc::Rc;

use drive_host::{
    DirectoryEntry, DriveApiError, DriveApiService, DriveConfig, DriveFuture, NoopDriveApiService,
    ProgressCallback, SearchQuery, SearchResponse, UploadTransport,
};

use crate::{load_drive_config, BrowserFile, WebDriveApiService, WebUploadTransport};

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `drive_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters talking to the file-server endpoints.
    Browser,
    /// Placeholder adapters that reject every request; used to mount the UI without a backend.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "drive-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "drive-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete listing/search backend behind [`DriveApiService`].
#[derive(Debug, Clone)]
pub enum DriveApiServiceAdapter {
    /// `fetch`-backed service.
    Browser(WebDriveApiService),
    /// No-op fallback used when the host is intentionally stubbed.
    Stub(NoopDriveApiService),
}

impl DriveApiService for DriveApiServiceAdapter {
    fn list_files<'a>(
        &'a self,
        path: &'a str,
    ) -> DriveFuture<'a, Result<Vec<DirectoryEntry>, DriveApiError>> {
        match self {
            Self::Browser(service) => service.list_files(path),
            Self::Stub(service) => service.list_files(path),
        }
    }

    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> DriveFuture<'a, Result<SearchResponse, DriveApiError>> {
        match self {
            Self::Browser(service) => service.search(query),
            Self::Stub(service) => service.search(query),
        }
    }
}

/// Adapter enum that erases the concrete upload backend behind [`UploadTransport`].
#[derive(Debug, Clone, Copy)]
pub enum UploadTransportAdapter {
    /// XHR multipart transport.
    Browser(WebUploadTransport),
    /// Rejects every upload.
    Stub,
}

impl UploadTransport for UploadTransportAdapter {
    type File = BrowserFile;

    fn upload<'a>(
        &'a self,
        url: &'a str,
        file: &'a Self::File,
        on_progress: ProgressCallback,
    ) -> DriveFuture<'a, Result<u16, DriveApiError>> {
        match self {
            Self::Browser(transport) => transport.upload(url, file, on_progress),
            Self::Stub => {
                Box::pin(async { Err(DriveApiError::Unsupported("upload".to_string())) })
            }
        }
    }
}

/// Builds the listing/search adapter for the compile-time selected host strategy.
pub fn drive_api_service(config: &DriveConfig) -> DriveApiServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            DriveApiServiceAdapter::Browser(WebDriveApiService::new(config.clone()))
        }
        HostStrategy::Stub => DriveApiServiceAdapter::Stub(NoopDriveApiService),
    }
}

/// Builds the upload adapter for the compile-time selected host strategy.
pub fn upload_transport() -> UploadTransportAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => UploadTransportAdapter::Browser(WebUploadTransport),
        HostStrategy::Stub => UploadTransportAdapter::Stub,
    }
}

#[derive(Clone)]
/// Services shared by the drive pages, provided once per mount through Leptos context.
pub struct DriveServices {
    /// Endpoint and asset configuration.
    pub config: DriveConfig,
    /// Listing and search backend.
    pub api: Rc<dyn DriveApiService>,
    /// Multipart upload backend.
    pub uploads: Rc<dyn UploadTransport<File = BrowserFile>>,
}

/// Loads the page config and builds every adapter for the selected host strategy.
pub fn build_drive_services() -> DriveServices {
    let config = load_drive_config();
    DriveServices {
        api: Rc::new(drive_api_service(&config)),
        uploads: Rc::new(upload_transport()),
        config,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_build_selects_browser_strategy() {
        #[cfg(not(feature = "drive-host-stub"))]
        {
            assert_eq!(selected_host_strategy(), HostStrategy::Browser);
            assert_eq!(host_strategy_name(), "browser");
        }

        #[cfg(feature = "drive-host-stub")]
        {
            assert_eq!(selected_host_strategy(), HostStrategy::Stub);
            assert_eq!(host_strategy_name(), "stub");
        }
    }

    #[test]
    fn stub_adapters_reject_requests() {
        let api = DriveApiServiceAdapter::Stub(NoopDriveApiService);
        assert_eq!(
            block_on(api.list_files("docs")).expect_err("list should fail"),
            DriveApiError::Unsupported("list_files".to_string())
        );
        let query = SearchQuery {
            file_name: "a".to_string(),
            current_dir: String::new(),
        };
        assert_eq!(
            block_on(api.search(&query)).expect_err("search should fail"),
            DriveApiError::Unsupported("search".to_string())
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn built_services_use_default_config_outside_browser() {
        let services = build_drive_services();
        assert_eq!(services.config, DriveConfig::default());
        assert!(matches!(
            block_on(services.api.list_files("")),
            Err(DriveApiError::Unsupported(_))
        ));
    }
}
