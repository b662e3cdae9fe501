//! Device-side file object model.
//!
//! [`DeviceFile`] binds a device connection and one item on it, and exposes
//! the copy and read operations. The actual byte moving lives in
//! `portamedia-transfer`; this crate adds the connection precondition and
//! the item-handle seam.

mod file;
mod handles;

pub use file::DeviceFile;
pub use handles::{DeviceHandle, ItemHandle};

use portamedia_transfer::{ObserverError, TransferError};

/// Errors produced by device file operations.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("device not connected")]
    NotConnected,

    #[error("destination directory not found: {}", .0.display())]
    PathNotFound(std::path::PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Observer(ObserverError),
}

impl From<TransferError> for DeviceError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::Io(e) => DeviceError::Io(e),
            TransferError::PathNotFound(p) => DeviceError::PathNotFound(p),
            TransferError::Observer(e) => DeviceError::Observer(e),
        }
    }
}
