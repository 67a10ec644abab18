//! Upload progress reporting.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A progress update pushed to the caller during an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProgress {
    /// Bytes transferred so far.
    pub bytes_sent: u64,
    /// Total bytes expected.
    pub bytes_total: u64,
}

/// Optional best-effort channel for progress updates.
///
/// Updates are dropped when the receiver lags; the upload never blocks
/// on the sink accepting them.
pub type ProgressSink = mpsc::Sender<UploadProgress>;

/// Push an update into the sink without blocking, dropping it on
/// backpressure or a closed receiver.
pub fn report(sink: &Option<ProgressSink>, bytes_sent: u64, bytes_total: u64) {
    if let Some(sink) = sink {
        let _ = sink.try_send(UploadProgress {
            bytes_sent,
            bytes_total,
        });
    }
}
