//! Extension-to-category table used to pick entry icons.
//!
//! Both the directory listing and search results consult this table so the two views cannot
//! drift apart.

/// Audio and video extensions rendered with the media icon.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "mp3", "wav", "avi", "mov", "flac", "ogg", "m4a", "webm", "mkv", "aac", "wmv", "3gp",
    "m4v", "mpg", "mpeg",
];

/// Image extensions rendered with the photo icon.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif", "apng", "avif",
    "jfif", "pjpeg", "pjp", "raw", "heic", "heif",
];

const EXTENSION_TABLE: &[(&[&str], FileCategory)] = &[
    (MEDIA_EXTENSIONS, FileCategory::Media),
    (IMAGE_EXTENSIONS, FileCategory::Image),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Display category of a listing or search entry.
pub enum FileCategory {
    /// Directory.
    Folder,
    /// Audio or video file.
    Media,
    /// Image file.
    Image,
    /// Anything else.
    Document,
}

impl FileCategory {
    /// Categorizes a listing entry.
    pub fn for_entry(name: &str, is_directory: bool) -> Self {
        if is_directory {
            Self::Folder
        } else {
            Self::for_file_name(name)
        }
    }

    /// Categorizes a file by its extension, falling back to [`FileCategory::Document`].
    pub fn for_file_name(name: &str) -> Self {
        let ext = file_extension(name);
        EXTENSION_TABLE
            .iter()
            .find(|(exts, _)| exts.contains(&ext.as_str()))
            .map(|(_, category)| *category)
            .unwrap_or(Self::Document)
    }

    /// Icon asset file name under the configured icon base.
    pub const fn icon_file(self) -> &'static str {
        match self {
            Self::Folder => "folder.svg",
            Self::Media => "play-circle.svg",
            Self::Image => "photo.svg",
            Self::Document => "document.svg",
        }
    }

    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Media => "media",
            Self::Image => "image",
            Self::Document => "document",
        }
    }
}

/// Lowercased text after the last `.`; a name without a dot is returned whole.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase()
}
