//! Listing and search wire types shared across host contracts and implementations.

use serde::{Deserialize, Serialize};

/// Entry name the listing never displays, independent of the dot-prefix rule.
pub const HIDDEN_FILE_MARKER: &str = ".DS_Store";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One file or subdirectory returned by the listing endpoint.
pub struct DirectoryEntry {
    /// Base name of the entry.
    pub name: String,
    /// Whether the entry is a directory.
    #[serde(default)]
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// Creates a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    /// Creates a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }

    /// Returns `true` for entries filtered from display (`.DS_Store` and any dot-prefixed name).
    pub fn is_hidden(&self) -> bool {
        self.name == HIDDEN_FILE_MARKER || self.name.starts_with('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One filename-search hit.
pub struct SearchResult {
    /// Base name of the matching file.
    pub file_name: String,
    /// Server-side path of the matching file.
    pub file_path: String,
    /// Directory of the hit relative to the share root.
    pub relative_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Query echo returned by the search endpoint.
pub struct SearchQueryEcho {
    /// Filename fragment that was searched.
    pub file_name: String,
    /// Directory the search was scoped to.
    pub current_dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Search endpoint response; every field is optional on the wire.
pub struct SearchResponse {
    /// Echo of the request parameters.
    #[serde(default)]
    pub query: Option<SearchQueryEcho>,
    /// Matching files.
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
    /// Number of matches reported by the backend.
    #[serde(default)]
    pub count: Option<u64>,
    /// Backend-reported error message.
    #[serde(default)]
    pub error: Option<String>,
    /// Additional error details.
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Validated filename search request scoped to a directory.
pub struct SearchQuery {
    /// Trimmed, non-empty filename fragment.
    pub file_name: String,
    /// Decoded relative directory the search is scoped to.
    pub current_dir: String,
}
