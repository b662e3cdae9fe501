use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use chrono::Utc;

use crate::observer::ProgressObserver;
use crate::snapshot::TransferSnapshot;
use crate::{DEFAULT_BUFFER_SIZE, TransferError};

/// Opens the destination file according to the overwrite policy.
///
/// With `overwrite` the file is created or truncated; without it, creation
/// fails with `ErrorKind::AlreadyExists` when the file is present. A
/// missing parent directory maps to [`TransferError::PathNotFound`].
fn open_destination(dest: &Path, overwrite: bool) -> Result<File, TransferError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(dest).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            let parent = dest.parent().unwrap_or(dest);
            TransferError::PathNotFound(parent.to_path_buf())
        } else {
            TransferError::Io(e)
        }
    })
}

/// Copies a source stream to `dest` without progress reporting.
///
/// `open_source` runs only after the destination is open, so an overwrite
/// refusal never touches the device. Returns the number of bytes written.
/// Both handles are dropped on every exit path.
pub fn copy_to_path<R, S>(open_source: S, dest: &Path, overwrite: bool) -> Result<u64, TransferError>
where
    R: Read,
    S: FnOnce() -> std::io::Result<R>,
{
    let mut file = open_destination(dest, overwrite)?;
    let mut source = open_source()?;
    let written = std::io::copy(&mut source, &mut file)?;
    Ok(written)
}

/// Copies a source stream to `dest`, delivering a [`TransferSnapshot`] to
/// `observer` after every chunk write.
///
/// Reads up to `buffer_size` bytes per chunk (0 selects
/// [`DEFAULT_BUFFER_SIZE`]). The loop ends only when the source reports
/// end-of-stream; `total_bytes` is carried into snapshots untouched, so a
/// source that misreports its size still copies completely. An observer
/// error stops the copy, and both handles are dropped before it reaches
/// the caller.
pub fn copy_to_path_with_progress<R, S, O>(
    open_source: S,
    dest: &Path,
    total_bytes: u64,
    overwrite: bool,
    buffer_size: usize,
    mut observer: O,
) -> Result<u64, TransferError>
where
    R: Read,
    S: FnOnce() -> std::io::Result<R>,
    O: ProgressObserver,
{
    let buffer_size = if buffer_size == 0 {
        DEFAULT_BUFFER_SIZE
    } else {
        buffer_size
    };

    let mut file = open_destination(dest, overwrite)?;
    let mut source = open_source()?;

    let started_at = Utc::now();
    let mut buffer = vec![0u8; buffer_size];
    let mut bytes_read: u64 = 0;

    loop {
        let n = source.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        file.write_all(&buffer[..n])?;
        bytes_read += n as u64;

        let snapshot = TransferSnapshot {
            bytes_read,
            total_bytes,
            started_at,
            reported_at: Utc::now(),
        };
        observer.report(snapshot).map_err(TransferError::Observer)?;
    }

    Ok(bytes_read)
}
