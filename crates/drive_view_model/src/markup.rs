//! HTML-string renderer for the listing and search view-models.
//!
//! This adapter produces the same rows as the Leptos pages, for hosts that template plain HTML.
//! All text and attribute values are escaped.

use std::fmt::Write as _;

use drive_host::{DriveConfig, FileCategory};

use crate::listing::{ListingState, ListingStatus};
use crate::search::{SearchController, SearchPhase};

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    push_escaped(&mut out, raw);
    out
}

fn push_escaped(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        let entity = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => {
                out.push(ch);
                continue;
            }
        };
        out.push_str(entity);
    }
}

fn push_link(
    out: &mut String,
    config: &DriveConfig,
    href: &str,
    category: FileCategory,
    body: &str,
) {
    out.push_str(r#"<a href=""#);
    push_escaped(out, href);
    let _ = write!(out, r#"" class="file-row file-row--{}"><img src=""#, category.token());
    push_escaped(out, &config.icon_href(category));
    out.push_str(r#"" class="file-icon" alt="">"#);
    out.push_str(body);
    out.push_str("</a>");
}

/// Renders the navigation row followed by every visible entry.
pub fn render_listing(state: &ListingState, config: &DriveConfig) -> String {
    let mut out = String::new();
    match state.status() {
        ListingStatus::Loading => {
            out.push_str(r#"<div class="listing-status">Loading...</div>"#);
            return out;
        }
        ListingStatus::Failed(message) => {
            let _ = write!(
                out,
                r#"<div class="listing-error" role="alert">{}</div>"#,
                escape_html(message)
            );
        }
        ListingStatus::Ready => {}
    }

    let nav = state.navigation_row();
    push_link(&mut out, config, &nav.href, nav.category, nav.label);
    for row in state.rows() {
        push_link(&mut out, config, &row.href, row.category, &escape_html(&row.name));
    }
    out
}

/// Renders the search panel body; `Idle` renders nothing.
pub fn render_search(controller: &SearchController, config: &DriveConfig) -> String {
    let mut out = String::new();
    match controller.phase() {
        SearchPhase::Idle => {}
        SearchPhase::Results { rows, .. } => {
            if let Some(heading) = controller.heading() {
                let _ = write!(out, "<h4>{}</h4>", escape_html(&heading));
            }
            for row in rows {
                let body = format!(
                    r#"<div class="search-hit"><div class="search-hit__name">{}</div><div class="search-hit__path">{}</div></div>"#,
                    escape_html(&row.file_name),
                    escape_html(&row.relative_path)
                );
                push_link(&mut out, config, &row.href, row.category, &body);
            }
        }
        SearchPhase::Error { details, .. } => {
            let message = controller.message().unwrap_or_default();
            let _ = write!(
                out,
                r#"<div class="search-status search-status--error">{}</div>"#,
                escape_html(&message)
            );
            if let Some(details) = details {
                let _ = write!(
                    out,
                    r#"<div class="search-status__details">{}</div>"#,
                    escape_html(details)
                );
            }
        }
        SearchPhase::Searching { .. } | SearchPhase::Empty { .. } => {
            let message = controller.message().unwrap_or_default();
            let _ = write!(
                out,
                r#"<div class="search-status">{}</div>"#,
                escape_html(&message)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use drive_host::{DirectoryEntry, SearchResponse, SearchResult};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn listing_markup_matches_view_model_rows() {
        let mut state = ListingState::new("");
        state.apply(Ok(vec![
            DirectoryEntry::file(".DS_Store"),
            DirectoryEntry::directory("a&b"),
            DirectoryEntry::file("<clip>.mp4"),
        ]));

        let html = render_listing(&state, &DriveConfig::default());

        assert_eq!(
            html,
            concat!(
                r#"<a href="/" class="file-row file-row--document"><img src="/icons/document.svg" class="file-icon" alt="">(Back to Home)</a>"#,
                r#"<a href="/files/a%26b/" class="file-row file-row--folder"><img src="/icons/folder.svg" class="file-icon" alt="">a&amp;b</a>"#,
                r#"<a href="/files/%3Cclip%3E.mp4" class="file-row file-row--media"><img src="/icons/play-circle.svg" class="file-icon" alt="">&lt;clip&gt;.mp4</a>"#,
            )
        );
        assert!(!html.contains("DS_Store"));
    }

    #[test]
    fn loading_listing_renders_status_only() {
        let html = render_listing(&ListingState::new("a"), &DriveConfig::default());
        assert_eq!(html, r#"<div class="listing-status">Loading...</div>"#);
    }

    #[test]
    fn empty_search_renders_message_without_results_list() {
        let mut controller = SearchController::default();
        controller.set_query_text("x<y");
        controller.begin("").expect("begin");
        controller.resolve(Ok(SearchResponse {
            count: Some(0),
            ..SearchResponse::default()
        }));

        let html = render_search(&controller, &DriveConfig::default());

        assert_eq!(
            html,
            r#"<div class="search-status">No files found matching &quot;x&lt;y&quot;</div>"#
        );
        assert!(!html.contains("file-row"));
    }

    #[test]
    fn search_results_markup_shows_relative_path() {
        let mut controller = SearchController::default();
        controller.set_query_text("cover");
        controller.begin("").expect("begin");
        controller.resolve(Ok(SearchResponse {
            results: Some(vec![SearchResult {
                file_name: "cover.png".to_string(),
                file_path: "/srv/art/cover.png".to_string(),
                relative_path: "art".to_string(),
            }]),
            count: Some(1),
            ..SearchResponse::default()
        }));

        let html = render_search(&controller, &DriveConfig::default());

        assert!(html.starts_with("<h4>Search Results (1 found):</h4>"));
        assert!(html.contains(r#"href="/files/art/cover.png""#));
        assert!(html.contains(r#"src="/icons/photo.svg""#));
        assert!(html.contains(r#"<div class="search-hit__path">art</div>"#));
    }
}
