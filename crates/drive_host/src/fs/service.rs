//! Listing and search service contracts.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use super::types::{DirectoryEntry, SearchQuery, SearchResponse};
use crate::error::DriveApiError;

/// Object-safe boxed future used by drive service async methods.
pub type DriveFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Backend service for directory listings and filename search.
pub trait DriveApiService {
    /// Lists the entries of a relative directory path.
    fn list_files<'a>(
        &'a self,
        path: &'a str,
    ) -> DriveFuture<'a, Result<Vec<DirectoryEntry>, DriveApiError>>;

    /// Runs a filename search scoped to a directory.
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> DriveFuture<'a, Result<SearchResponse, DriveApiError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op drive service for unsupported targets and stubbed builds.
pub struct NoopDriveApiService;

impl DriveApiService for NoopDriveApiService {
    fn list_files<'a>(
        &'a self,
        _path: &'a str,
    ) -> DriveFuture<'a, Result<Vec<DirectoryEntry>, DriveApiError>> {
        Box::pin(async { Err(DriveApiError::Unsupported("list_files".to_string())) })
    }

    fn search<'a>(
        &'a self,
        _query: &'a SearchQuery,
    ) -> DriveFuture<'a, Result<SearchResponse, DriveApiError>> {
        Box::pin(async { Err(DriveApiError::Unsupported("search".to_string())) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request observed by [`MemoryDriveApiService`].
pub enum RecordedRequest {
    /// A listing of the given path.
    List(String),
    /// A filename search.
    Search(SearchQuery),
}

#[derive(Debug, Default)]
struct MemoryDriveState {
    directories: HashMap<String, Vec<DirectoryEntry>>,
    searches: HashMap<String, Result<SearchResponse, DriveApiError>>,
    requests: Vec<RecordedRequest>,
}

#[derive(Debug, Clone, Default)]
/// In-memory drive service with canned listings and search responses.
///
/// Unknown directories fail with a transport error; unknown search terms return an empty result
/// set. Every call is recorded so callers can assert which requests were issued.
pub struct MemoryDriveApiService {
    inner: Rc<RefCell<MemoryDriveState>>,
}

impl MemoryDriveApiService {
    /// Registers the listing returned for `path`.
    pub fn insert_directory(&self, path: impl Into<String>, entries: Vec<DirectoryEntry>) {
        self.inner
            .borrow_mut()
            .directories
            .insert(path.into(), entries);
    }

    /// Registers the outcome returned for a search on `file_name`.
    pub fn insert_search(
        &self,
        file_name: impl Into<String>,
        outcome: Result<SearchResponse, DriveApiError>,
    ) {
        self.inner
            .borrow_mut()
            .searches
            .insert(file_name.into(), outcome);
    }

    /// Returns every request issued so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.borrow().requests.clone()
    }
}

impl DriveApiService for MemoryDriveApiService {
    fn list_files<'a>(
        &'a self,
        path: &'a str,
    ) -> DriveFuture<'a, Result<Vec<DirectoryEntry>, DriveApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.requests.push(RecordedRequest::List(path.to_string()));
            state
                .directories
                .get(path)
                .cloned()
                .ok_or_else(|| DriveApiError::transport(path, "directory not found"))
        })
    }

    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> DriveFuture<'a, Result<SearchResponse, DriveApiError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.requests.push(RecordedRequest::Search(query.clone()));
            state
                .searches
                .get(&query.file_name)
                .cloned()
                .unwrap_or_else(|| {
                    Ok(SearchResponse {
                        results: Some(Vec::new()),
                        count: Some(0),
                        ..SearchResponse::default()
                    })
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn noop_drive_service_reports_unsupported() {
        let api = NoopDriveApiService;
        let api_obj: &dyn DriveApiService = &api;

        let err = block_on(api_obj.list_files("")).expect_err("list should fail");
        assert!(err.to_string().contains("list_files"));

        let query = SearchQuery {
            file_name: "a".to_string(),
            current_dir: String::new(),
        };
        let err = block_on(api_obj.search(&query)).expect_err("search should fail");
        assert_eq!(err, DriveApiError::Unsupported("search".to_string()));
    }

    #[test]
    fn memory_drive_service_serves_and_records_requests() {
        let api = MemoryDriveApiService::default();
        let api_obj: &dyn DriveApiService = &api;
        api.insert_directory("music", vec![DirectoryEntry::file("song.mp3")]);

        assert_eq!(
            block_on(api_obj.list_files("music")).expect("list"),
            vec![DirectoryEntry::file("song.mp3")]
        );
        assert!(block_on(api_obj.list_files("missing")).is_err());

        let query = SearchQuery {
            file_name: "nothing".to_string(),
            current_dir: "music".to_string(),
        };
        let response = block_on(api_obj.search(&query)).expect("search");
        assert_eq!(response.count, Some(0));

        assert_eq!(
            api.requests(),
            vec![
                RecordedRequest::List("music".to_string()),
                RecordedRequest::List("missing".to_string()),
                RecordedRequest::Search(query),
            ]
        );
    }
}
