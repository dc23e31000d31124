//! # Table Registry
//!
//! Maps table names to their metadata: the schema descriptor the codec
//! needs, the declared in-memory record size, and the on-disk directory.
//! The registry is in-memory and per-database; on-disk table contents
//! survive the handle, and re-registering a name after restart binds the
//! existing directory again without touching its files.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::records::Schema;

/// Metadata for one registered table.
#[derive(Debug, Clone)]
pub struct TableMeta {
    pub name: String,
    pub schema: Schema,
    /// Declared in-memory record size from registration; must be nonzero.
    pub record_size: usize,
    /// Table directory, relative to the backend prefix.
    pub dir: PathBuf,
}

impl Database {
    /// Registers (or re-registers) a table.
    ///
    /// Fails with `Invalid` only for an empty name, a schema with no
    /// columns, or a zero record size. The table directory is created
    /// idempotently; re-registration overwrites the metadata for `name`
    /// without touching existing record files.
    pub fn register_table(
        &mut self,
        name: &str,
        schema: Schema,
        record_size: usize,
    ) -> Result<()> {
        if name.is_empty() || schema.is_empty() || record_size == 0 {
            return Err(Error::Invalid(format!(
                "table registration rejected: name '{}', {} columns, record size {}",
                name,
                schema.column_count(),
                record_size
            )));
        }

        let dir = self.db_path.join(name);
        if !self.backend.mkdir(&dir) {
            debug!("table directory {} not created (may already exist)", dir.display());
        }

        self.tables.insert(
            name.to_string(),
            TableMeta {
                name: name.to_string(),
                schema,
                record_size,
                dir: dir.clone(),
            },
        );

        info!("registered table {} at {}", name, dir.display());
        Ok(())
    }

    /// Looks up a registered table. Absence is `Invalid`, the error every
    /// dependent operation reports for an unknown table.
    pub(crate) fn table(&self, name: &str) -> Result<&TableMeta> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::Invalid(format!("table not registered: {}", name)))
    }

    /// True if `name` is currently registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Removes the in-memory entry only; directory removal belongs to
    /// `drop_table`.
    pub(crate) fn unregister(&mut self, name: &str) {
        self.tables.remove(name);
    }
}
