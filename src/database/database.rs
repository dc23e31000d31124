//! # Database Handle
//!
//! Construction and path plumbing for [`Database`]. Directory creation is
//! lazy and idempotent: opening a database (re)creates `lodb/` and
//! `lodb/<name>/` under the backend prefix, and on-disk data outlives the
//! in-memory handle.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::{DB_ROOT_DIR, RECORD_FILE_SUFFIX};
use crate::database::catalog::TableMeta;
use crate::error::{Error, Result};
use crate::id::RecordId;
use crate::storage::{FileBackend, LocalFs};

/// A named namespace of tables stored as one directory tree under the
/// backend prefix.
pub struct Database {
    pub(crate) name: String,
    pub(crate) backend: Arc<dyn FileBackend>,
    pub(crate) db_path: PathBuf,
    pub(crate) tables: HashMap<String, TableMeta>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("name", &self.name)
            .field("db_path", &self.db_path)
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Opens (or creates) the database `name` on `backend`.
    ///
    /// Creates `lodb/` and `lodb/<name>/` if missing; existing directories
    /// and their contents are left untouched.
    pub fn open(name: &str, backend: Arc<dyn FileBackend>) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::Invalid("database name is empty".to_string()));
        }

        backend.mkdir(Path::new(DB_ROOT_DIR));
        let db_path = Path::new(DB_ROOT_DIR).join(name);
        if !backend.mkdir(&db_path) && !backend.exists(&db_path) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("failed to create database directory {}", db_path.display()),
            )));
        }

        info!("opened database {} at {}", name, db_path.display());
        Ok(Self {
            name: name.to_string(),
            backend,
            db_path,
            tables: HashMap::new(),
        })
    }

    /// Convenience constructor using [`LocalFs`] rooted at `prefix`.
    pub fn open_local(prefix: impl Into<PathBuf>, name: &str) -> Result<Self> {
        Self::open(name, Arc::new(LocalFs::new(prefix)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the record file for `id`, relative to the backend prefix.
    pub(crate) fn record_path(meta: &TableMeta, id: RecordId) -> PathBuf {
        meta.dir.join(format!("{}{}", id.to_hex(), RECORD_FILE_SUFFIX))
    }
}
