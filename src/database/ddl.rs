//! # Table-Level Operations
//!
//! `truncate` empties a table, `drop_table` removes it entirely. Both treat
//! an already-absent directory as the post-condition holding, and both
//! continue past per-file failures: the goal state, not the path there, is
//! what they report on. Drop is best-effort all the way down so the
//! registry entry is removed even when the filesystem partially fails.

use std::io;

use tracing::{info, warn};

use crate::database::Database;
use crate::error::{Error, Result};

impl Database {
    /// Deletes every file in the table directory. Metadata and the
    /// directory itself are kept; a missing directory is already-empty
    /// success.
    pub fn truncate(&self, table: &str) -> Result<()> {
        let meta = self.table(table)?;

        let entries = match self.backend.read_dir(&meta.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(Error::Io(err)),
        };

        let mut removed = 0usize;
        for entry in entries {
            if entry.is_dir {
                continue;
            }
            let path = meta.dir.join(&entry.name);
            if self.backend.remove_file(&path) {
                removed += 1;
            } else {
                warn!("failed to delete {} during truncate", path.display());
            }
        }

        info!("truncated table {}: deleted {} files", table, removed);
        Ok(())
    }

    /// Truncates, removes the table directory recursively, and unregisters
    /// the table. Later steps run even when earlier ones partially fail.
    pub fn drop_table(&mut self, table: &str) -> Result<()> {
        let dir = self.table(table)?.dir.clone();

        if let Err(err) = self.truncate(table) {
            warn!("truncate before drop of {} failed: {}", table, err);
        }
        if !self.backend.remove_dir(&dir, true) && self.backend.exists(&dir) {
            warn!("failed to remove table directory {}", dir.display());
        }
        self.unregister(table);

        info!("dropped table {}", table);
        Ok(())
    }
}
