//! File type classification derived from extension or MIME type.

use serde::{Deserialize, Serialize};

/// Image file extensions (lowercase).
const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];
/// Video file extensions (lowercase).
const VIDEO_EXTS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "mkv", "webm"];
/// Document file extensions (lowercase).
const DOCUMENT_EXTS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt"];

/// Category of an uploaded file, fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// An image file.
    Image,
    /// A video file.
    Video,
    /// A document file.
    Document,
    /// Anything else.
    Other,
}

impl FileType {
    /// Classify a file by the extension of its name.
    pub fn from_file_name(file_name: &str) -> Self {
        match extension(file_name) {
            Some(ext) if IMAGE_EXTS.contains(&ext.as_str()) => Self::Image,
            Some(ext) if VIDEO_EXTS.contains(&ext.as_str()) => Self::Video,
            Some(ext) if DOCUMENT_EXTS.contains(&ext.as_str()) => Self::Document,
            _ => Self::Other,
        }
    }

    /// Classify a file by its declared MIME type.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("application/") || mime.starts_with("text/") {
            Self::Document
        } else {
            Self::Other
        }
    }

    /// The string form used on the wire (`"image"`, `"video"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type filter for list queries.
///
/// The wire sentinel `"all"` means "no filter"; anything else is an exact
/// match on the record's file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// No type filter applied.
    #[default]
    All,
    /// Only records of the given type.
    Only(FileType),
}

impl TypeFilter {
    /// Whether a record of the given type passes this filter.
    pub fn matches(&self, file_type: FileType) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == file_type,
        }
    }

    /// The query-string form (`"all"`, `"image"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(t) => t.as_str(),
        }
    }
}

impl From<Option<FileType>> for TypeFilter {
    fn from(value: Option<FileType>) -> Self {
        match value {
            Some(t) => Self::Only(t),
            None => Self::All,
        }
    }
}

/// Lowercased extension of a file name, if it has one.
pub fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit('.')
        .next()
        .filter(|ext| *ext != file_name && !ext.is_empty())
        .map(|ext| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_name() {
        assert_eq!(FileType::from_file_name("photo.JPG"), FileType::Image);
        assert_eq!(FileType::from_file_name("clip.mp4"), FileType::Video);
        assert_eq!(FileType::from_file_name("report.pdf"), FileType::Document);
        assert_eq!(FileType::from_file_name("archive.zip"), FileType::Other);
        assert_eq!(FileType::from_file_name("noextension"), FileType::Other);
    }

    #[test]
    fn test_from_mime() {
        assert_eq!(FileType::from_mime("image/png"), FileType::Image);
        assert_eq!(FileType::from_mime("video/mp4"), FileType::Video);
        assert_eq!(FileType::from_mime("application/pdf"), FileType::Document);
        assert_eq!(FileType::from_mime("audio/mpeg"), FileType::Other);
    }

    #[test]
    fn test_type_filter_matches() {
        assert!(TypeFilter::All.matches(FileType::Video));
        assert!(TypeFilter::Only(FileType::Image).matches(FileType::Image));
        assert!(!TypeFilter::Only(FileType::Image).matches(FileType::Video));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&FileType::Image).expect("serialize");
        assert_eq!(json, "\"image\"");
        let parsed: FileType = serde_json::from_str("\"document\"").expect("deserialize");
        assert_eq!(parsed, FileType::Document);
    }
}
