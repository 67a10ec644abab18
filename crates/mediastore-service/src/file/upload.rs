//! Upload path of the mutation engine — validation, quota, record creation.

use chrono::Utc;
use tracing::info;

use mediastore_core::error::AppError;
use mediastore_core::result::AppResult;
use mediastore_core::traits::UploadRequest;
use mediastore_core::types::file_type::{extension, FileType};
use mediastore_core::types::id::random_suffix;
use mediastore_core::types::progress::report;
use mediastore_core::types::{FileId, FileRecord, FileStatus};

use super::service::FileService;

impl FileService {
    /// Validate, store the payload, and persist a new active record.
    ///
    /// Fails with `InvalidType` for extensions outside the allowed set
    /// and `CapacityExceeded` when the quota over active records would
    /// be exceeded; the store is left unchanged in both cases.
    pub async fn upload_file(&self, request: UploadRequest) -> AppResult<FileRecord> {
        let size = request.data.len() as u64;
        if size > self.upload_config().max_file_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.upload_config().max_file_size_bytes
            )));
        }

        let ext = extension(&request.original_name).ok_or_else(|| {
            AppError::invalid_type(format!(
                "File has no extension: {}",
                request.original_name
            ))
        })?;
        if !self.upload_config().is_allowed_extension(&ext) {
            return Err(AppError::invalid_type(format!(
                "File extension not allowed: .{ext}"
            )));
        }

        let file_type = resolve_type(&request.original_name, request.declared_type.as_deref());
        let mime_type = request
            .declared_type
            .clone()
            .unwrap_or_else(|| mime_for_extension(&ext).to_string());

        // Quota check and record insert share one load-modify-save cycle.
        let _guard = self.lock_writes().await;
        let mut all = self.records().load_all().await?;

        let quota = self.quota_bytes();
        if quota > 0 {
            let used: u64 = all
                .iter()
                .filter(|r| r.is_active())
                .map(|r| r.file_size)
                .sum();
            if used + size > quota {
                return Err(AppError::capacity_exceeded(format!(
                    "Upload of {size} bytes would exceed the {quota}-byte quota ({used} in use)"
                )));
            }
        }

        report(&request.progress, 0, size);

        let file_name = unique_file_name(&ext);
        let stored = self
            .payloads()
            .store(
                &file_name,
                &mime_type,
                request.data.clone(),
                file_type == FileType::Image,
            )
            .await?;

        let record = FileRecord {
            id: FileId::generate(),
            file_name,
            original_name: request.original_name,
            file_type,
            file_url: stored.file_url,
            file_size: size,
            upload_time: Utc::now(),
            user_id: request.owner_id,
            platform: request.platform,
            status: FileStatus::Active,
            thumbnail: stored.thumbnail,
        };

        all.push(record.clone());
        self.records().save_all(&all).await?;

        report(&request.progress, size, size);
        info!(id = %record.id, name = %record.original_name, bytes = size, "Uploaded file");
        Ok(record)
    }
}

/// Derive the file type from the extension, falling back to the
/// declared MIME type for names that classify as `Other`.
fn resolve_type(original_name: &str, declared_type: Option<&str>) -> FileType {
    match FileType::from_file_name(original_name) {
        FileType::Other => declared_type.map(FileType::from_mime).unwrap_or(FileType::Other),
        t => t,
    }
}

/// A collision-resistant store-assigned file name keeping the extension.
fn unique_file_name(ext: &str) -> String {
    format!("{}_{}.{ext}", Utc::now().timestamp_millis(), random_suffix())
}

/// Common MIME type for an extension, used when the source declares none.
fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
