//! `/files` route helpers shared by the directory lister and search renderers.
//!
//! Paths handled here are *relative* drive paths (`"music/live"`), never URLs. URL output is
//! always built segment by segment so a literal `/` inside the path stays a separator while every
//! other reserved byte is percent-encoded.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Route prefix under which directories and files are browsed.
pub const FILES_ROUTE_PREFIX: &str = "/files";
/// Site root used by the "(Back to Home)" navigation row.
pub const HOME_HREF: &str = "/";

/// Same byte set `encodeURIComponent` leaves untouched.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Derives the current directory from a browser location pathname.
///
/// Strips the [`FILES_ROUTE_PREFIX`], then at most one leading and one trailing slash, and
/// percent-decodes the remainder exactly once. Pathnames outside the prefix resolve to the
/// repository root (`""`).
pub fn resolve_current_path(pathname: &str) -> String {
    let Some(rest) = pathname.strip_prefix(FILES_ROUTE_PREFIX) else {
        return String::new();
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    decode_component(rest)
}

/// Percent-encodes one path component with `encodeURIComponent` semantics.
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT_ENCODE_SET).to_string()
}

/// Percent-decodes a URL fragment; invalid UTF-8 is replaced lossily.
pub fn decode_component(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Encodes each `/`-delimited segment independently and re-joins them with a literal `/`.
pub fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Drops the last `/`-delimited segment of a relative path.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}

/// Joins a directory and a child name, omitting the separator at the root.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// Builds the browse URL for a directory (always slash-terminated).
pub fn directory_href(path: &str) -> String {
    if path.is_empty() {
        format!("{FILES_ROUTE_PREFIX}/")
    } else {
        format!("{FILES_ROUTE_PREFIX}/{}/", encode_segments(path))
    }
}

/// Builds the download URL for a file.
pub fn file_href(path: &str) -> String {
    format!("{FILES_ROUTE_PREFIX}/{}", encode_segments(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_current_path_matches_expected_cases() {
        let cases = [
            ("/files/a%20b/c/", "a b/c"),
            ("/files", ""),
            ("/files/", ""),
            ("/files/music", "music"),
            ("/files//double/", "/double"),
            ("/files/%E6%96%87%E4%BB%B6/", "文件"),
            ("/", ""),
            ("/upload", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(resolve_current_path(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn resolve_current_path_decodes_exactly_once() {
        assert_eq!(resolve_current_path("/files/a%2520b"), "a%20b");
        assert_eq!(resolve_current_path("/files/a%2Fb/"), "a/b");
    }

    #[test]
    fn encode_component_keeps_unreserved_marks() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("it's (1)!~*.-_"), "it's%20(1)!~*.-_");
        assert_eq!(encode_component("a/b?c#d&e"), "a%2Fb%3Fc%23d%26e");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn encode_segments_keeps_separators_literal() {
        assert_eq!(encode_segments("a b/c#d"), "a%20b/c%23d");
        assert_eq!(encode_segments(""), "");
    }

    #[test]
    fn parent_path_drops_last_segment() {
        assert_eq!(parent_path("a/b/c"), "a/b");
        assert_eq!(parent_path("a"), "");
        assert_eq!(parent_path(""), "");
    }

    #[test]
    fn hrefs_use_files_prefix() {
        assert_eq!(directory_href(""), "/files/");
        assert_eq!(directory_href("a b/c"), "/files/a%20b/c/");
        assert_eq!(file_href("docs/100% done.txt"), "/files/docs/100%25%20done.txt");
        assert_eq!(join_path("", "x.txt"), "x.txt");
        assert_eq!(join_path("a", "x.txt"), "a/x.txt");
    }
}
