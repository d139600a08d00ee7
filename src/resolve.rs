//! Conflict resolution between the in-memory buffer and the backing file
//!
//! The backing file's content on disk is the one resource shared between
//! this editor, any external process that might also touch the file, and
//! the execution collaborator. There is no locking; the modification-time
//! comparison here is the sole (advisory) concurrency policy.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Which content is authoritative for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// The in-memory edit is at least as recent as the file; the buffer
    /// wins and must be flushed to disk before execution
    UseBuffer,
    /// An external process modified the file more recently than any
    /// in-editor keystroke; the disk content wins and the editor must
    /// reload to stay consistent
    UseDisk,
}

/// Decide which content is authoritative
///
/// Ties resolve to the buffer: the editor's own last write is treated as
/// authoritative over no newer external change.
pub fn resolve(on_disk_mtime: SystemTime, last_edit: SystemTime) -> Authority {
    if on_disk_mtime > last_edit {
        Authority::UseDisk
    } else {
        Authority::UseBuffer
    }
}

/// Resolve against the backing file's current on-disk state
///
/// A missing backing file is not a conflict (there is nothing to compare
/// against), so the buffer is authoritative. Any other stat failure is a
/// real I/O error.
pub fn against_disk(path: &Path, last_edit: SystemTime) -> io::Result<Authority> {
    match fs::metadata(path) {
        Ok(meta) => Ok(resolve(meta.modified()?, last_edit)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Authority::UseBuffer),
        Err(e) => Err(e),
    }
}
