use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time progress of one copy operation.
///
/// A snapshot is delivered to the observer after every chunk write, on the
/// copying thread. It is plain data; holding on to one keeps nothing else
/// alive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSnapshot {
    /// Cumulative bytes copied so far. Non-decreasing within one transfer.
    pub bytes_read: u64,
    /// Source size as reported by the item handle when the transfer started.
    ///
    /// Advisory: the stream decides when the transfer ends, so `bytes_read`
    /// may finish above or below this value.
    pub total_bytes: u64,
    /// When the transfer started. Identical across snapshots of a transfer.
    pub started_at: DateTime<Utc>,
    /// When this snapshot was taken.
    pub reported_at: DateTime<Utc>,
}

impl TransferSnapshot {
    /// Time elapsed between transfer start and this snapshot.
    pub fn elapsed(&self) -> TimeDelta {
        self.reported_at - self.started_at
    }

    /// Returns the transfer progress as a percentage (0-100).
    ///
    /// Returns 0.0 when `total_bytes` is 0. Not capped: a source that
    /// yields more bytes than its reported size pushes this past 100.
    pub fn percentage(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.bytes_read as f64 / self.total_bytes as f64 * 100.0
    }

    /// Bytes left according to `total_bytes`, saturating at 0.
    pub fn remaining(&self) -> u64 {
        self.total_bytes.saturating_sub(self.bytes_read)
    }
}
