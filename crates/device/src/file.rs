//! File operations on a single device item.

use std::io::{BufReader, Read};
use std::path::Path;

use portamedia_transfer::ProgressObserver;
use tracing::debug;

use crate::DeviceError;
use crate::handles::{DeviceHandle, ItemHandle};

/// A file on a connected device, addressed by its device and item handles.
///
/// Borrows both handles for the lifetime of the view and caches nothing
/// between calls. Every operation re-checks the connection first and fails
/// with [`DeviceError::NotConnected`] before any stream or local file is
/// opened.
pub struct DeviceFile<'a> {
    device: &'a dyn DeviceHandle,
    item: &'a dyn ItemHandle,
}

impl<'a> DeviceFile<'a> {
    /// Creates a view over `item` on `device`.
    pub fn new(device: &'a dyn DeviceHandle, item: &'a dyn ItemHandle) -> Self {
        Self { device, item }
    }

    fn ensure_connected(&self) -> Result<(), DeviceError> {
        if self.device.is_connected() {
            Ok(())
        } else {
            Err(DeviceError::NotConnected)
        }
    }

    /// Copies the file content to `dest`.
    ///
    /// With `overwrite`, an existing destination is truncated; otherwise
    /// the copy fails without opening the device stream. Returns the number
    /// of bytes written.
    pub fn copy_to(&self, dest: &Path, overwrite: bool) -> Result<u64, DeviceError> {
        self.ensure_connected()?;
        let written =
            portamedia_transfer::copy_to_path(|| self.item.open_read(), dest, overwrite)?;
        debug!(dest = %dest.display(), bytes = written, "copied file content");
        Ok(written)
    }

    /// Copies the file content to `dest`, reporting progress to `observer`.
    ///
    /// `buffer_size` bounds each read; 0 selects the 8 KiB default. The
    /// observer runs synchronously on this thread after every chunk write,
    /// with the item's reported size carried as the snapshot total.
    pub fn copy_to_with_progress<O: ProgressObserver>(
        &self,
        dest: &Path,
        overwrite: bool,
        buffer_size: usize,
        observer: O,
    ) -> Result<u64, DeviceError> {
        self.ensure_connected()?;
        let total_bytes = self.item.size();
        let written = portamedia_transfer::copy_to_path_with_progress(
            || self.item.open_read(),
            dest,
            total_bytes,
            overwrite,
            buffer_size,
            observer,
        )?;
        debug!(dest = %dest.display(), bytes = written, total = total_bytes, "copied file content");
        Ok(written)
    }

    /// Copies the file's icon resource to `dest`.
    ///
    /// Same overwrite policy as [`copy_to`](Self::copy_to).
    pub fn copy_icon_to(&self, dest: &Path, overwrite: bool) -> Result<u64, DeviceError> {
        self.ensure_connected()?;
        let written =
            portamedia_transfer::copy_to_path(|| self.item.open_read_icon(), dest, overwrite)?;
        debug!(dest = %dest.display(), bytes = written, "copied icon");
        Ok(written)
    }

    /// Copies the file's thumbnail resource to `dest`.
    ///
    /// Same overwrite policy as [`copy_to`](Self::copy_to).
    pub fn copy_thumbnail_to(&self, dest: &Path, overwrite: bool) -> Result<u64, DeviceError> {
        self.ensure_connected()?;
        let written = portamedia_transfer::copy_to_path(
            || self.item.open_read_thumbnail(),
            dest,
            overwrite,
        )?;
        debug!(dest = %dest.display(), bytes = written, "copied thumbnail");
        Ok(written)
    }

    /// Opens the file content for reading.
    pub fn open_read(&self) -> Result<Box<dyn Read>, DeviceError> {
        self.ensure_connected()?;
        Ok(self.item.open_read()?)
    }

    /// Opens the icon resource for reading.
    pub fn open_icon(&self) -> Result<Box<dyn Read>, DeviceError> {
        self.ensure_connected()?;
        Ok(self.item.open_read_icon()?)
    }

    /// Opens the thumbnail resource for reading.
    pub fn open_thumbnail(&self) -> Result<Box<dyn Read>, DeviceError> {
        self.ensure_connected()?;
        Ok(self.item.open_read_thumbnail()?)
    }

    /// Opens the file content for buffered text reading.
    ///
    /// Line reads through the returned reader enforce UTF-8 and fail with
    /// `ErrorKind::InvalidData` on malformed bytes.
    pub fn open_text(&self) -> Result<BufReader<Box<dyn Read>>, DeviceError> {
        self.ensure_connected()?;
        Ok(BufReader::new(self.item.open_read()?))
    }
}
