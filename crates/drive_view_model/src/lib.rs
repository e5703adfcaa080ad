//! Renderer-neutral view-models for the drive UI.
//!
//! Each page keeps one state value (`ListingState`, `SearchController`, `UploadState`) and renders
//! it declaratively. The async drivers in this crate mutate that state through a [`StateCell`], so
//! the Leptos pages (backed by signals) and headless callers (backed by `Rc<RefCell<_>>`) share
//! one transition path. [`markup`] is the second renderer adapter, producing escaped HTML from the
//! same state.

pub mod cell;
pub mod listing;
pub mod markup;
pub mod search;
pub mod upload;

pub use cell::StateCell;
pub use listing::{
    entry_row, list_directory, navigation_row, refresh_listing, EntryRow, ListingState,
    ListingStatus, NavigationRow, BACK_TO_HOME_LABEL, GO_BACK_LABEL, LISTING_FAILED_MESSAGE,
};
pub use markup::{escape_html, render_listing, render_search};
pub use search::{
    search_result_row, submit_search, SearchController, SearchError, SearchPhase,
    SearchResultRow, EMPTY_QUERY_MESSAGE, SEARCH_FAILED_MESSAGE,
};
pub use upload::{
    format_size_mb, submit_upload, SelectedFileSummary, UploadError, UploadState, UploadStatus,
    NO_FILE_SELECTED_MESSAGE, UPLOAD_FAILED_MESSAGE, UPLOAD_SUCCESS_MESSAGE,
};
