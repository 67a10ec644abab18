//! Upload limits and allowed extensions.

use serde::{Deserialize, Serialize};

/// Upload validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum single-file size in bytes (default 10 MB).
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
    /// Allowed image extensions.
    #[serde(default = "default_image_exts")]
    pub allowed_image_exts: Vec<String>,
    /// Allowed video extensions.
    #[serde(default = "default_video_exts")]
    pub allowed_video_exts: Vec<String>,
    /// Allowed document extensions.
    #[serde(default = "default_document_exts")]
    pub allowed_document_exts: Vec<String>,
}

impl UploadConfig {
    /// Whether the given lowercased extension is in any allowed set.
    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.allowed_image_exts.iter().any(|e| e == ext)
            || self.allowed_video_exts.iter().any(|e| e == ext)
            || self.allowed_document_exts.iter().any(|e| e == ext)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            allowed_image_exts: default_image_exts(),
            allowed_video_exts: default_video_exts(),
            allowed_document_exts: default_document_exts(),
        }
    }
}

fn default_max_file_size() -> u64 {
    10_485_760 // 10 MB
}

fn default_image_exts() -> Vec<String> {
    ["jpg", "jpeg", "png", "gif", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_video_exts() -> Vec<String> {
    ["mp4", "mov", "avi", "mkv"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_document_exts() -> Vec<String> {
    ["pdf", "doc", "docx", "txt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
