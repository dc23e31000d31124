//! # Local Filesystem Backend
//!
//! [`LocalFs`] implements [`FileBackend`] over `std::fs`, rooted at a prefix
//! directory chosen by the caller. A single mutex wraps every physical
//! operation, so concurrent logical callers serialize at the I/O boundary —
//! the same guarantee the engine's contract demands of any backend.
//!
//! The lock guards no data, only the medium; it is deliberately a unit
//! mutex taken for the duration of each call.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::{DirEntry, FileBackend};

/// `std::fs` backend rooted at a prefix directory.
pub struct LocalFs {
    root: PathBuf,
    io_lock: Mutex<()>,
}

impl LocalFs {
    /// Creates a backend whose path namespace is rooted at `root`. The root
    /// itself is created lazily by the first `mkdir`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            io_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileBackend for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        let _io = self.io_lock.lock();
        self.resolve(path).exists()
    }

    fn mkdir(&self, path: &Path) -> bool {
        let _io = self.io_lock.lock();
        fs::create_dir_all(self.resolve(path)).is_ok()
    }

    fn remove_file(&self, path: &Path) -> bool {
        let _io = self.io_lock.lock();
        fs::remove_file(self.resolve(path)).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> bool {
        let _io = self.io_lock.lock();
        fs::rename(self.resolve(from), self.resolve(to)).is_ok()
    }

    fn remove_dir(&self, path: &Path, recursive: bool) -> bool {
        let _io = self.io_lock.lock();
        let target = self.resolve(path);
        if recursive {
            fs::remove_dir_all(target).is_ok()
        } else {
            fs::remove_dir(target).is_ok()
        }
    }

    fn read_file(&self, path: &Path, max_len: usize) -> io::Result<Vec<u8>> {
        let _io = self.io_lock.lock();
        let file = fs::File::open(self.resolve(path))?;
        let mut data = Vec::new();
        file.take(max_len as u64).read_to_end(&mut data)?;
        Ok(data)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let _io = self.io_lock.lock();
        fs::write(self.resolve(path), data)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let _io = self.io_lock.lock();
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        Ok(entries)
    }
}
