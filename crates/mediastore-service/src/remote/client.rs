//! HTTP client implementing [`FileBackend`] against a remote file service.
//!
//! The remote service speaks the `{code, message, data}` envelope over
//! JSON; transport failures, non-2xx statuses, and malformed responses
//! all surface as `BackendUnavailable`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::StatusCode;
use tracing::{debug, info};

use mediastore_core::config::backend::RemoteBackendConfig;
use mediastore_core::error::AppError;
use mediastore_core::result::AppResult;
use mediastore_core::traits::{FileBackend, ListQuery, StorageInfo, UploadRequest};
use mediastore_core::types::progress::report;
use mediastore_core::types::{
    BatchDeleteOutcome, Envelope, FileId, FilePage, FileRecord, PageRequest, TypeFilter,
};

use crate::batch;

/// The remote backend variant.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    /// Create a client for the service at `config.base_url` with a
    /// per-request timeout.
    pub fn new(config: &RemoteBackendConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    mediastore_core::error::ErrorKind::Configuration,
                    "Failed to build HTTP client",
                    e,
                )
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decode a response into the envelope's payload, mapping non-2xx
    /// statuses and non-zero envelope codes to errors.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::backend_unavailable(format!(
                "Remote service returned HTTP {status}"
            )));
        }
        let envelope: Envelope<T> = response.json().await?;
        envelope.into_result()
    }
}

#[async_trait]
impl FileBackend for RemoteClient {
    fn backend_type(&self) -> &str {
        "remote"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let response = self
            .http
            .get(self.url("/api/files"))
            .query(&[("page", "1"), ("pageSize", "1")])
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    async fn upload(&self, request: UploadRequest) -> AppResult<FileRecord> {
        let size = request.data.len() as u64;
        report(&request.progress, 0, size);

        let mut part =
            multipart::Part::bytes(request.data.to_vec()).file_name(request.original_name.clone());
        if let Some(mime) = &request.declared_type {
            part = part
                .mime_str(mime)
                .map_err(|e| AppError::validation(format!("Invalid MIME type: {e}")))?;
        }
        let form = multipart::Form::new()
            .part("file", part)
            .text("userId", request.owner_id.clone())
            .text("platform", request.platform.clone());

        let response = self
            .http
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        let record: FileRecord = Self::decode(response).await?;

        report(&request.progress, size, size);
        info!(id = %record.id, name = %record.original_name, "Uploaded file via remote service");
        Ok(record)
    }

    async fn list(&self, query: &ListQuery) -> AppResult<FilePage> {
        let mut params = vec![
            ("userId", query.owner_id.clone()),
            ("page", query.page.page.to_string()),
            ("pageSize", query.page.page_size.to_string()),
        ];
        if let TypeFilter::Only(t) = query.file_type {
            params.push(("fileType", t.as_str().to_string()));
        }

        let response = self
            .http
            .get(self.url("/api/files"))
            .query(&params)
            .send()
            .await?;
        let page: FilePage = Self::decode(response).await?;
        debug!(total = page.total, "Listed files via remote service");
        Ok(page)
    }

    async fn get(&self, id: &FileId) -> AppResult<Option<FileRecord>> {
        let response = self
            .http
            .get(self.url(&format!("/api/files/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::decode(response).await?))
    }

    async fn soft_delete(&self, id: &FileId) -> AppResult<bool> {
        let response = self
            .http
            .post(self.url(&format!("/api/files/{id}/trash")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::decode(response).await
    }

    async fn hard_delete(&self, id: &FileId) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/files/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("File not found: {id}")));
        }
        let _deleted: bool = Self::decode(response).await?;
        info!(id = %id, "Hard-deleted file via remote service");
        Ok(())
    }

    async fn batch_delete(
        &self,
        ids: &[FileId],
        timeout: Duration,
    ) -> AppResult<BatchDeleteOutcome> {
        let outcome = batch::delete_each(ids, timeout, |id| self.hard_delete(id)).await;
        info!(
            success = outcome.success.len(),
            failed = outcome.failed.len(),
            "Batch delete finished via remote service"
        );
        Ok(outcome)
    }

    async fn storage_info(&self, owner_id: &str) -> AppResult<StorageInfo> {
        // The remote service exposes no usage endpoint; derive the
        // statistics from a listing, like the callers it replaces.
        let query = ListQuery {
            owner_id: owner_id.to_string(),
            file_type: TypeFilter::All,
            page: PageRequest::new(1, 100),
        };
        let page = self.list(&query).await?;
        let used_bytes: u64 = page.list.iter().map(|r| r.file_size).sum();

        Ok(StorageInfo {
            used_bytes,
            quota_bytes: 0,
            used_percent: 0,
            file_count: page.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = RemoteClient::new(&RemoteBackendConfig {
            base_url: "http://localhost:3000/".to_string(),
            timeout_secs: 5,
        })
        .expect("client");
        assert_eq!(client.url("/api/files"), "http://localhost:3000/api/files");
    }

    #[test]
    fn test_envelope_failure_maps_to_error() {
        let json = r#"{"code":-1,"message":"upstream down","data":null}"#;
        let envelope: Envelope<FilePage> = serde_json::from_str(json).expect("decode");
        let err = envelope.into_result().expect_err("error");
        assert_eq!(
            err.kind,
            mediastore_core::error::ErrorKind::BackendUnavailable
        );
        assert_eq!(err.message, "upstream down");
    }

    #[test]
    fn test_page_wire_decode() {
        let json = r#"{
            "code": 0,
            "message": "ok",
            "data": {
                "list": [],
                "page": 1,
                "pageSize": 20,
                "total": 0,
                "totalPages": 0
            }
        }"#;
        let envelope: Envelope<FilePage> = serde_json::from_str(json).expect("decode");
        let page = envelope.into_result().expect("page");
        assert_eq!(page.page_size, 20);
    }
}
