//! Directory lister view-model: listing status, navigation row, and entry rows.

use drive_host::{
    directory_href, file_href, join_path, parent_path, resolve_current_path, DirectoryEntry,
    DriveApiError, DriveApiService, FileCategory, HOME_HREF,
};
use leptos::logging;

use crate::cell::StateCell;

/// Navigation label shown inside a subdirectory.
pub const GO_BACK_LABEL: &str = "(Go Back)";
/// Navigation label shown at the repository root.
pub const BACK_TO_HOME_LABEL: &str = "(Back to Home)";
/// User-facing message for listing transport/parse failures.
pub const LISTING_FAILED_MESSAGE: &str = "Failed to load files";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Load state of the current directory listing.
pub enum ListingStatus {
    /// A listing request is in flight.
    Loading,
    /// The last request succeeded.
    Ready,
    /// The last request failed; holds the user-facing message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// First row of every listing: up one level, or back to the site root.
pub struct NavigationRow {
    /// Row label.
    pub label: &'static str,
    /// Link target.
    pub href: String,
    /// Icon category.
    pub category: FileCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One visible directory entry.
pub struct EntryRow {
    /// Display name.
    pub name: String,
    /// Link target (`/files/<segments>/` for directories).
    pub href: String,
    /// Icon category.
    pub category: FileCategory,
}

/// Builds the navigation row for `current_path`.
pub fn navigation_row(current_path: &str) -> NavigationRow {
    if current_path.is_empty() {
        NavigationRow {
            label: BACK_TO_HOME_LABEL,
            href: HOME_HREF.to_string(),
            category: FileCategory::Document,
        }
    } else {
        NavigationRow {
            label: GO_BACK_LABEL,
            href: directory_href(&parent_path(current_path)),
            category: FileCategory::Folder,
        }
    }
}

/// Builds the row for one entry of `current_path`.
pub fn entry_row(current_path: &str, entry: &DirectoryEntry) -> EntryRow {
    let full_path = join_path(current_path, &entry.name);
    let href = if entry.is_directory {
        directory_href(&full_path)
    } else {
        file_href(&full_path)
    };
    EntryRow {
        name: entry.name.clone(),
        href,
        category: FileCategory::for_entry(&entry.name, entry.is_directory),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Listing state for one page load.
pub struct ListingState {
    current_path: String,
    entries: Vec<DirectoryEntry>,
    status: ListingStatus,
}

impl ListingState {
    /// Creates a loading state for a decoded relative directory path.
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            entries: Vec::new(),
            status: ListingStatus::Loading,
        }
    }

    /// Creates a loading state for a browser location pathname.
    pub fn from_pathname(pathname: &str) -> Self {
        Self::new(resolve_current_path(pathname))
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ListingStatus::Loading)
    }

    /// User-facing error message of the last failed load.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ListingStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Marks a new request as in flight; the previous entries are kept.
    pub fn begin_load(&mut self) {
        self.status = ListingStatus::Loading;
    }

    /// Applies a listing response. Failures keep the previous entries untouched.
    pub fn apply(&mut self, result: Result<Vec<DirectoryEntry>, DriveApiError>) {
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.status = ListingStatus::Ready;
            }
            Err(err) => {
                logging::warn!("list directory `{}` failed: {err}", self.current_path);
                self.status = ListingStatus::Failed(LISTING_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn navigation_row(&self) -> NavigationRow {
        navigation_row(&self.current_path)
    }

    /// Number of entries that survive the hidden-file filter.
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_hidden()).count()
    }

    /// Rows for every non-hidden entry, in backend order.
    pub fn rows(&self) -> Vec<EntryRow> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_hidden())
            .map(|entry| entry_row(&self.current_path, entry))
            .collect()
    }
}

/// Requests the entries of `path` from the backend.
///
/// # Errors
///
/// Returns the service error when the request fails or the body is not a JSON entry array.
pub async fn list_directory(
    api: &dyn DriveApiService,
    path: &str,
) -> Result<Vec<DirectoryEntry>, DriveApiError> {
    api.list_files(path).await
}

/// Loads the listing for the cell's current path and applies the outcome.
pub async fn refresh_listing<C: StateCell<ListingState>>(api: &dyn DriveApiService, cell: &C) {
    let path = cell.read_state(|state| state.current_path.clone());
    cell.update_state(ListingState::begin_load);
    let result = list_directory(api, &path).await;
    cell.update_state(|state| state.apply(result));
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use drive_host::MemoryDriveApiService;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(name: &str, href: &str, category: FileCategory) -> EntryRow {
        EntryRow {
            name: name.to_string(),
            href: href.to_string(),
            category,
        }
    }

    #[test]
    fn navigation_row_links_to_parent_or_home() {
        assert_eq!(
            navigation_row("a/b/c"),
            NavigationRow {
                label: GO_BACK_LABEL,
                href: "/files/a/b/".to_string(),
                category: FileCategory::Folder,
            }
        );
        assert_eq!(navigation_row("a").href, "/files/");
        assert_eq!(
            navigation_row(""),
            NavigationRow {
                label: BACK_TO_HOME_LABEL,
                href: "/".to_string(),
                category: FileCategory::Document,
            }
        );
    }

    #[test]
    fn navigation_row_reencodes_parent_segments_independently() {
        assert_eq!(
            navigation_row("my docs/a?b/leaf").href,
            "/files/my%20docs/a%3Fb/"
        );
    }

    #[test]
    fn rows_filter_hidden_entries_and_pick_icons() {
        let mut state = ListingState::new("media");
        state.apply(Ok(vec![
            DirectoryEntry::file(".DS_Store"),
            DirectoryEntry::file(".hidden"),
            DirectoryEntry::directory("..odd"),
            DirectoryEntry::directory("live sets"),
            DirectoryEntry::file("intro.MP3"),
            DirectoryEntry::file("cover.png"),
            DirectoryEntry::file("notes.txt"),
        ]));

        assert_eq!(state.status(), &ListingStatus::Ready);
        assert_eq!(state.visible_count(), 4);
        assert_eq!(
            state.rows(),
            vec![
                row("live sets", "/files/media/live%20sets/", FileCategory::Folder),
                row("intro.MP3", "/files/media/intro.MP3", FileCategory::Media),
                row("cover.png", "/files/media/cover.png", FileCategory::Image),
                row("notes.txt", "/files/media/notes.txt", FileCategory::Document),
            ]
        );
    }

    #[test]
    fn failed_load_keeps_previous_entries() {
        let mut state = ListingState::from_pathname("/files/docs/");
        state.apply(Ok(vec![DirectoryEntry::file("a.txt")]));
        state.begin_load();
        assert!(state.is_loading());

        state.apply(Err(DriveApiError::decode(
            "/api/list-files?path=docs",
            "expected array",
        )));

        assert_eq!(state.error_message(), Some(LISTING_FAILED_MESSAGE));
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.rows()[0].href, "/files/docs/a.txt");
    }

    #[test]
    fn refresh_listing_requests_resolved_path() {
        let api = MemoryDriveApiService::default();
        api.insert_directory("a b/c", vec![DirectoryEntry::directory("d")]);
        let cell = Rc::new(RefCell::new(ListingState::from_pathname("/files/a%20b/c/")));

        block_on(refresh_listing(&api, &cell));

        let state = cell.borrow();
        assert_eq!(state.current_path(), "a b/c");
        assert_eq!(state.status(), &ListingStatus::Ready);
        assert_eq!(state.visible_count(), 1);
        assert_eq!(
            state.rows(),
            vec![row("d", "/files/a%20b/c/d/", FileCategory::Folder)]
        );
        assert_eq!(state.navigation_row().href, "/files/a%20b/");
    }

    #[test]
    fn refresh_listing_surfaces_transport_failure() {
        let api = MemoryDriveApiService::default();
        let cell = Rc::new(RefCell::new(ListingState::new("missing")));

        block_on(refresh_listing(&api, &cell));

        assert_eq!(
            cell.borrow().status(),
            &ListingStatus::Failed(LISTING_FAILED_MESSAGE.to_string())
        );
    }
}
