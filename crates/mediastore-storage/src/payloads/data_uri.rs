//! Inline data-URI payload store used by the local backend.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use tracing::debug;

use mediastore_core::result::AppResult;
use mediastore_core::traits::{PayloadStore, StoredPayload};

/// Payload store that encodes the bytes into the locator itself as a
/// `data:<mime>;base64,<...>` URI, making each record self-contained.
///
/// Since nothing lives outside the record, `remove` has nothing to do:
/// dropping the record drops the payload.
#[derive(Debug, Clone, Default)]
pub struct DataUriPayloads;

impl DataUriPayloads {
    /// Create a new inline payload store.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PayloadStore for DataUriPayloads {
    async fn store(
        &self,
        file_name: &str,
        mime_type: &str,
        data: Bytes,
        is_image: bool,
    ) -> AppResult<StoredPayload> {
        let encoded = STANDARD.encode(&data);
        let file_url = format!("data:{mime_type};base64,{encoded}");
        debug!(file_name, bytes = data.len(), "Encoded payload inline");

        Ok(StoredPayload {
            // Images reuse the inline payload as their own thumbnail.
            thumbnail: is_image.then(|| file_url.clone()),
            file_url,
        })
    }

    async fn remove(&self, _file_url: &str) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_encodes_data_uri() {
        let store = DataUriPayloads::new();
        let stored = store
            .store("a.png", "image/png", Bytes::from_static(b"hi"), true)
            .await
            .expect("store");
        assert_eq!(stored.file_url, "data:image/png;base64,aGk=");
        assert_eq!(stored.thumbnail.as_deref(), Some(stored.file_url.as_str()));
    }

    #[tokio::test]
    async fn test_non_image_has_no_thumbnail() {
        let store = DataUriPayloads::new();
        let stored = store
            .store("a.txt", "text/plain", Bytes::from_static(b"hi"), false)
            .await
            .expect("store");
        assert!(stored.thumbnail.is_none());
    }
}
