//! Streaming file copy with synchronous progress reporting.
//!
//! Device-agnostic: the source is anything readable, supplied lazily so the
//! destination is always acquired first. Connection preconditions live in
//! `portamedia-device`.

mod copy;
mod observer;
mod snapshot;
mod speed;

pub use copy::{copy_to_path, copy_to_path_with_progress};
pub use observer::{ChannelObserver, ObserverError, ProgressObserver};
pub use snapshot::TransferSnapshot;
pub use speed::SpeedCalculator;

/// Default read buffer size: 8 KiB.
///
/// A requested buffer size of 0 selects this value.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("destination directory not found: {}", .0.display())]
    PathNotFound(std::path::PathBuf),

    #[error(transparent)]
    Observer(ObserverError),
}
