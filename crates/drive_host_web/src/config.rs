//! Page-level readers: the `<meta>` config override and the current location path.

use drive_host::{DriveConfig, DRIVE_CONFIG_META_NAME};
use leptos::logging;

use crate::bridge;

/// Loads the drive configuration for this page.
///
/// Reads the JSON `content` of `<meta name="drive-config">` when present. A malformed override is
/// logged and the defaults are used instead.
pub fn load_drive_config() -> DriveConfig {
    match bridge::meta_content(DRIVE_CONFIG_META_NAME) {
        Some(raw) => parse_config_override(&raw),
        None => DriveConfig::default(),
    }
}

fn parse_config_override(raw: &str) -> DriveConfig {
    if raw.trim().is_empty() {
        return DriveConfig::default();
    }
    DriveConfig::from_json(raw).unwrap_or_else(|err| {
        logging::warn!("ignoring invalid `{DRIVE_CONFIG_META_NAME}` override: {err}");
        DriveConfig::default()
    })
}

/// Returns `window.location.pathname`, or an empty string outside a browser.
pub fn current_pathname() -> String {
    bridge::location_pathname().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn override_replaces_only_given_keys() {
        let config = parse_config_override(r#"{"upload_endpoint":"/api/upload"}"#);
        assert_eq!(config.upload_endpoint, "/api/upload");
        assert_eq!(config.list_files_endpoint, DriveConfig::default().list_files_endpoint);
    }

    #[test]
    fn blank_or_malformed_override_falls_back_to_defaults() {
        assert_eq!(parse_config_override("  "), DriveConfig::default());
        assert_eq!(parse_config_override("{not json"), DriveConfig::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn page_readers_fall_back_outside_browser() {
        assert_eq!(load_drive_config(), DriveConfig::default());
        assert_eq!(current_pathname(), "");
    }
}
