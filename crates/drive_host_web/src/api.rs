//! Browser listing/search service backed by `fetch`.

use drive_host::{
    DirectoryEntry, DriveApiError, DriveApiService, DriveConfig, DriveFuture, SearchQuery,
    SearchResponse,
};

use crate::bridge;

#[derive(Debug, Clone, Default)]
/// Browser drive service that issues `GET` requests against the configured endpoints.
pub struct WebDriveApiService {
    config: DriveConfig,
}

impl WebDriveApiService {
    /// Creates a service for the given endpoint configuration.
    pub fn new(config: DriveConfig) -> Self {
        Self { config }
    }
}

impl DriveApiService for WebDriveApiService {
    fn list_files<'a>(
        &'a self,
        path: &'a str,
    ) -> DriveFuture<'a, Result<Vec<DirectoryEntry>, DriveApiError>> {
        Box::pin(async move { bridge::fetch_json(&self.config.list_files_url(path)).await })
    }

    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> DriveFuture<'a, Result<SearchResponse, DriveApiError>> {
        Box::pin(async move { bridge::fetch_json(&self.config.search_url(query)).await })
    }
}
