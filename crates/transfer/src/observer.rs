use std::sync::mpsc;

use crate::snapshot::TransferSnapshot;

/// Error an observer can fail a transfer with.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

/// Receives progress snapshots during a copy.
///
/// `report` runs synchronously on the copying thread, once per chunk,
/// before the next read is issued. A slow observer slows the copy; a
/// failing observer aborts it. The destination file and source stream are
/// closed before the returned error reaches the caller.
pub trait ProgressObserver {
    /// Handles one snapshot.
    fn report(&mut self, snapshot: TransferSnapshot) -> Result<(), ObserverError>;
}

/// Plain closures observe infallibly.
impl<F: FnMut(TransferSnapshot)> ProgressObserver for F {
    fn report(&mut self, snapshot: TransferSnapshot) -> Result<(), ObserverError> {
        self(snapshot);
        Ok(())
    }
}

/// Forwards every snapshot into an `mpsc` channel.
///
/// Lets another thread render progress while this one copies. A
/// disconnected receiver aborts the transfer.
pub struct ChannelObserver {
    tx: mpsc::Sender<TransferSnapshot>,
}

impl ChannelObserver {
    /// Wraps `tx`.
    pub fn new(tx: mpsc::Sender<TransferSnapshot>) -> Self {
        Self { tx }
    }
}

impl ProgressObserver for ChannelObserver {
    fn report(&mut self, snapshot: TransferSnapshot) -> Result<(), ObserverError> {
        self.tx.send(snapshot).map_err(Into::into)
    }
}
