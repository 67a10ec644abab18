//! Concurrent fan-out for batch deletes.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use mediastore_core::result::AppResult;
use mediastore_core::types::{BatchDeleteOutcome, FileId};

/// Run one delete per id concurrently, bounding each by `timeout`, and
/// classify every outcome into the success or failed list.
///
/// Results are reported in input order regardless of completion order.
/// There is no rollback: each item is fire-and-forget.
pub(crate) async fn delete_each<'a, F>(
    ids: &'a [FileId],
    timeout: Duration,
    op: impl Fn(&'a FileId) -> F,
) -> BatchDeleteOutcome
where
    F: Future<Output = AppResult<()>>,
{
    let tasks = ids.iter().map(|id| {
        let fut = op(id);
        async move { tokio::time::timeout(timeout, fut).await }
    });
    let results = futures::future::join_all(tasks).await;

    let mut outcome = BatchDeleteOutcome::default();
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(Ok(())) => outcome.success.push(id.clone()),
            Ok(Err(e)) => {
                warn!(id = %id, error = %e, "Batch delete item failed");
                outcome.failed.push(id.clone());
            }
            Err(_) => {
                warn!(id = %id, timeout_ms = timeout.as_millis() as u64, "Batch delete item timed out");
                outcome.failed.push(id.clone());
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use mediastore_core::error::AppError;

    use super::*;

    #[tokio::test]
    async fn test_classification_preserves_input_order() {
        let ids: Vec<FileId> = ["a", "b", "c", "d"].iter().map(|s| FileId::from(*s)).collect();

        let outcome = delete_each(&ids, Duration::from_secs(1), |id| {
            let fail = id.as_str() == "b";
            async move {
                if fail {
                    Err(AppError::not_found("missing"))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        let success: Vec<&str> = outcome.success.iter().map(|i| i.as_str()).collect();
        let failed: Vec<&str> = outcome.failed.iter().map(|i| i.as_str()).collect();
        assert_eq!(success, ["a", "c", "d"]);
        assert_eq!(failed, ["b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_classified_as_failed() {
        let ids = [FileId::from("slow")];

        let outcome = delete_each(&ids, Duration::from_millis(10), |_| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        assert!(outcome.success.is_empty());
        assert_eq!(outcome.failed.len(), 1);
    }
}
