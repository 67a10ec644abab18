//! Startup-time backend selection.

use std::sync::Arc;

use tracing::info;

use mediastore_core::config::backend::BackendMode;
use mediastore_core::config::AppConfig;
use mediastore_core::result::AppResult;
use mediastore_core::traits::{FileBackend, PayloadStore, RecordStore};
use mediastore_storage::{DataUriPayloads, JsonFileStore, MemoryStore};

use crate::file::FileService;
use crate::remote::RemoteClient;

/// Construct the backend variant named by the configuration.
///
/// The choice is made once per process; callers share the returned
/// handle and never re-dispatch between variants at runtime.
pub async fn connect(config: &AppConfig) -> AppResult<Arc<dyn FileBackend>> {
    match config.backend.mode {
        BackendMode::Local => {
            let records: Arc<dyn RecordStore> = if config.backend.local.db_path.is_empty() {
                Arc::new(MemoryStore::new())
            } else {
                Arc::new(JsonFileStore::new(&config.backend.local.db_path).await?)
            };
            let payloads: Arc<dyn PayloadStore> = Arc::new(DataUriPayloads::new());

            info!(
                db_path = %config.backend.local.db_path,
                quota_bytes = config.backend.local.quota_bytes,
                "Using local backend"
            );
            Ok(Arc::new(FileService::new(
                records,
                payloads,
                config.upload.clone(),
                config.backend.local.quota_bytes,
            )))
        }
        BackendMode::Remote => {
            info!(base_url = %config.backend.remote.base_url, "Using remote backend");
            Ok(Arc::new(RemoteClient::new(&config.backend.remote)?))
        }
    }
}
