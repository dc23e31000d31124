//! # Storage Module
//!
//! The storage layer is the engine's only path to physical I/O. Everything
//! above it — record store, query engine, table registry — manipulates
//! prefix-relative paths and hands them to a [`FileBackend`].
//!
//! ## The Backend Seam
//!
//! The engine itself holds no lock and does not touch `std::fs` directly.
//! A backend owns the storage prefix (where `lodb/` lives) and must
//! serialize all physical operations that touch the same medium: at most one
//! read/write/directory operation completes at a time. [`LocalFs`] satisfies
//! this with a single mutex around every call. Replacement backends MUST
//! preserve at least that guarantee.
//!
//! ## Contract Notes
//!
//! - `mkdir` is idempotent: an existing directory is success.
//! - `read_file` never returns more than `max_len` bytes; records are small
//!   bounded blobs, so there is no handle or streaming interface.
//! - `rename` replaces an existing destination, which is what makes
//!   atomic record replacement possible.
//! - `read_dir` yields entries in backend-defined order. The order is not
//!   stable across calls or platforms, and the query engine treats it as
//!   unordered input.
//! - Mutating operations report success as `bool`; the post-condition, not
//!   the cause of failure, is what callers act on.

mod local;

use std::io;
use std::path::Path;

pub use local::LocalFs;

/// A directory entry as reported by [`FileBackend::read_dir`].
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Final path component, including any extension.
    pub name: String,
    /// True for subdirectories, which record scans skip.
    pub is_dir: bool,
}

/// Physical file operations over a path namespace rooted at the backend's
/// storage prefix.
///
/// All paths are relative to that prefix. Implementations must serialize
/// physical access to the same storage medium.
pub trait FileBackend: Send + Sync {
    /// True if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates a directory (and missing parents). Existing directory is
    /// success.
    fn mkdir(&self, path: &Path) -> bool;

    /// Removes a single file. False if it did not exist or removal failed.
    fn remove_file(&self, path: &Path) -> bool;

    /// Renames `from` to `to`, replacing `to` if present.
    fn rename(&self, from: &Path, to: &Path) -> bool;

    /// Removes a directory, recursively when asked.
    fn remove_dir(&self, path: &Path, recursive: bool) -> bool;

    /// Reads at most `max_len` bytes of the file at `path`.
    ///
    /// A missing file is an error of kind [`io::ErrorKind::NotFound`].
    fn read_file(&self, path: &Path, max_len: usize) -> io::Result<Vec<u8>>;

    /// Creates or truncates the file at `path` with exactly `data`.
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// Enumerates the entries of a directory, in backend-defined order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}
