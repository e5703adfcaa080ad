//! Search controller: query validation, request building, and response interpretation.
//!
//! Phases run `Idle -> Searching -> {Results | Empty | Error}`. Any terminal phase can start a new
//! search, and [`SearchController::clear`] returns to `Idle` without a request. A response that
//! arrives after the controller left `Searching` is dropped.

use drive_host::{
    file_href, join_path, DriveApiError, DriveApiService, FileCategory, SearchQuery,
    SearchResponse, SearchResult,
};
use leptos::logging;
use thiserror::Error;

use crate::cell::StateCell;

/// Validation message for an empty or whitespace-only query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a filename to search";
/// User-facing message for search transport/parse failures.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a search was not started.
pub enum SearchError {
    /// The query was empty after trimming.
    #[error("Please enter a filename to search")]
    EmptyQuery,
    /// Another search is still in flight.
    #[error("a search is already in progress")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered search hit.
pub struct SearchResultRow {
    /// File name (primary line).
    pub file_name: String,
    /// Directory relative to the share root (secondary line).
    pub relative_path: String,
    /// Direct file link.
    pub href: String,
    /// Icon category.
    pub category: FileCategory,
}

/// Builds the row for one search hit.
pub fn search_result_row(result: &SearchResult) -> SearchResultRow {
    SearchResultRow {
        file_name: result.file_name.clone(),
        relative_path: result.relative_path.clone(),
        href: file_href(&join_path(&result.relative_path, &result.file_name)),
        category: FileCategory::for_file_name(&result.file_name),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Search panel phase.
pub enum SearchPhase {
    /// Nothing to show; the results panel is hidden.
    #[default]
    Idle,
    /// A request for `query` is in flight.
    Searching {
        /// Trimmed query text.
        query: String,
    },
    /// The backend returned matches.
    Results {
        /// Trimmed query text.
        query: String,
        /// Match count reported by the backend (or the row count when absent).
        count: u64,
        /// Rendered hits.
        rows: Vec<SearchResultRow>,
    },
    /// The backend returned no matches.
    Empty {
        /// Trimmed query text.
        query: String,
    },
    /// Validation, transport, or backend error.
    Error {
        /// User-facing message.
        message: String,
        /// Backend-supplied details, when present.
        details: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Search input text plus the current phase.
pub struct SearchController {
    query_text: String,
    phase: SearchPhase,
    generation: u64,
}

impl SearchController {
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Returns `true` while a request is in flight; the submit control is disabled meanwhile.
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    /// Whether the results panel is shown (`Searching`, `Results`, or `Empty`).
    pub fn panel_visible(&self) -> bool {
        matches!(
            self.phase,
            SearchPhase::Searching { .. } | SearchPhase::Results { .. } | SearchPhase::Empty { .. }
        )
    }

    /// Panel heading for the results phase.
    pub fn heading(&self) -> Option<String> {
        match &self.phase {
            SearchPhase::Results { count, .. } => Some(format!("Search Results ({count} found):")),
            _ => None,
        }
    }

    /// Inline status text for non-result phases.
    pub fn message(&self) -> Option<String> {
        match &self.phase {
            SearchPhase::Idle | SearchPhase::Results { .. } => None,
            SearchPhase::Searching { .. } => Some("Searching files...".to_string()),
            SearchPhase::Empty { query } => Some(format!("No files found matching \"{query}\"")),
            SearchPhase::Error { message, .. } => Some(message.clone()),
        }
    }

    /// Validates the query text and enters `Searching`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] (and shows the validation message) when the trimmed
    /// query is empty, or [`SearchError::InFlight`] while a previous search has not resolved.
    /// Neither case issues a request.
    pub fn begin(&mut self, current_dir: &str) -> Result<SearchQuery, SearchError> {
        if self.is_searching() {
            return Err(SearchError::InFlight);
        }
        let file_name = self.query_text.trim();
        if file_name.is_empty() {
            self.phase = SearchPhase::Error {
                message: EMPTY_QUERY_MESSAGE.to_string(),
                details: None,
            };
            return Err(SearchError::EmptyQuery);
        }
        let query = SearchQuery {
            file_name: file_name.to_string(),
            current_dir: current_dir.to_string(),
        };
        self.phase = SearchPhase::Searching {
            query: query.file_name.clone(),
        };
        self.generation += 1;
        Ok(query)
    }

    /// Interprets the outcome of the in-flight search.
    pub fn resolve(&mut self, result: Result<SearchResponse, DriveApiError>) {
        let SearchPhase::Searching { query } = &self.phase else {
            return;
        };
        let query = query.clone();

        self.phase = match result {
            Err(err) => {
                logging::warn!("search for `{query}` failed: {err}");
                SearchPhase::Error {
                    message: SEARCH_FAILED_MESSAGE.to_string(),
                    details: None,
                }
            }
            Ok(SearchResponse {
                error: Some(error),
                details,
                ..
            }) => SearchPhase::Error {
                message: format!("Error: {error}"),
                details,
            },
            Ok(SearchResponse {
                results: Some(results),
                count,
                ..
            }) if !results.is_empty() && count != Some(0) => SearchPhase::Results {
                query,
                count: count.unwrap_or(results.len() as u64),
                rows: results.iter().map(search_result_row).collect(),
            },
            Ok(_) => SearchPhase::Empty { query },
        };
    }

    /// Resets the query text and hides the panel without issuing a request.
    pub fn clear(&mut self) {
        self.query_text.clear();
        self.phase = SearchPhase::Idle;
        self.generation += 1;
    }
}

/// Runs one search for the cell's query text scoped to `current_dir`.
///
/// # Errors
///
/// Returns the [`SearchError`] from [`SearchController::begin`]; no request is sent in that case.
pub async fn submit_search<C: StateCell<SearchController>>(
    api: &dyn DriveApiService,
    cell: &C,
    current_dir: &str,
) -> Result<(), SearchError> {
    let mut started = Err(SearchError::InFlight);
    let mut ticket = 0;
    cell.update_state(|controller| {
        started = controller.begin(current_dir);
        ticket = controller.generation;
    });
    let query = started?;

    let result = api.search(&query).await;
    // A clear (or a clear followed by a new search) while awaiting makes this response stale.
    cell.update_state(|controller| {
        if controller.generation == ticket {
            controller.resolve(result);
        }
    });
    Ok(())
}
