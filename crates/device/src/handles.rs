//! Device and item handle traits.
//!
//! Implemented by whatever device stack is in use (an MTP session, a PTP
//! transport, a test double). Using traits keeps the file operations
//! decoupled from the transport and testable with mocks.

use std::io::{self, Read};

/// Connection state of the device that owns the items being read.
pub trait DeviceHandle {
    /// Whether the device connection is currently usable.
    ///
    /// Operations consult this before touching any stream, so a handle to
    /// an unplugged device fails fast instead of surfacing a mid-copy read
    /// error.
    fn is_connected(&self) -> bool;
}

/// One file object on a device.
///
/// Each accessor opens a fresh, independent stream positioned at the
/// start of the resource.
pub trait ItemHandle {
    /// Opens the file content for reading.
    fn open_read(&self) -> io::Result<Box<dyn Read>>;

    /// Opens the file's icon resource for reading.
    fn open_read_icon(&self) -> io::Result<Box<dyn Read>>;

    /// Opens the file's thumbnail resource for reading.
    fn open_read_thumbnail(&self) -> io::Result<Box<dyn Read>>;

    /// Content size in bytes as reported by the device.
    ///
    /// Advisory. Streams are read to their own end; this value only seeds
    /// progress totals.
    fn size(&self) -> u64;
}
