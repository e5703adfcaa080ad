//! Runtime configuration for backend endpoints and static assets.

use serde::{Deserialize, Serialize};

use crate::fs::category::FileCategory;
use crate::fs::path::encode_component;
use crate::fs::types::SearchQuery;

/// `<meta name="...">` whose `content` may carry a JSON [`DriveConfig`] override.
pub const DRIVE_CONFIG_META_NAME: &str = "drive-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Endpoint and asset locations used by the drive UI.
///
/// Every field has a default matching the stock backend, so a partial JSON override only needs
/// the keys it changes.
pub struct DriveConfig {
    /// Directory listing endpoint (`GET ?path=`).
    pub list_files_endpoint: String,
    /// Filename search endpoint prefix.
    pub search_endpoint: String,
    /// Multipart upload endpoint.
    pub upload_endpoint: String,
    /// Base URL of the entry icon set.
    pub icon_base: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            list_files_endpoint: "/api/list-files".to_string(),
            search_endpoint: "/api/search_feat".to_string(),
            upload_endpoint: "/upload".to_string(),
            icon_base: "/icons".to_string(),
        }
    }
}

impl DriveConfig {
    /// Parses a JSON override; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object of string fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Listing request URL for a relative directory path.
    pub fn list_files_url(&self, path: &str) -> String {
        format!("{}?path={}", self.list_files_endpoint, encode_component(path))
    }

    /// Search request URL with both parameters encoded as separate path segments.
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/file_name={}/current_dir={}",
            self.search_endpoint.trim_end_matches('/'),
            encode_component(&query.file_name),
            encode_component(&query.current_dir)
        )
    }

    /// Icon asset URL for an entry category.
    pub fn icon_href(&self, category: FileCategory) -> String {
        format!(
            "{}/{}",
            self.icon_base.trim_end_matches('/'),
            category.icon_file()
        )
    }
}
