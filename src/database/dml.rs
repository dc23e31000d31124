//! # Single-Record Operations
//!
//! One record is exactly one file. Insert refuses to overwrite, get reads
//! and decodes, update replaces atomically via a temp file and rename,
//! delete removes. Every operation requires a registered table and fails
//! with `Invalid` otherwise.
//!
//! ## Error Mapping
//!
//! | Condition | Error |
//! |-----------|-------|
//! | file already present on insert | `Invalid` (duplicate id) |
//! | file absent on get/update/delete | `NotFound` |
//! | open/write failure, short write, empty file on read | `Io` |
//! | codec failure | `Encode` / `Decode` |

use std::io;

use tracing::{debug, warn};

use crate::config::{MAX_RECORD_SIZE, TMP_FILE_SUFFIX};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::id::RecordId;
use crate::records::{self, Record};

impl Database {
    /// Inserts a new record under `id`. The identifier must be unused in
    /// this table.
    pub fn insert(&self, table: &str, id: RecordId, record: &Record) -> Result<()> {
        let meta = self.table(table)?;
        let path = Self::record_path(meta, id);

        if self.backend.exists(&path) {
            warn!("insert rejected, record {} already exists in {}", id, table);
            return Err(Error::Invalid(format!(
                "record {} already exists in table {}",
                id, table
            )));
        }

        let mut buf = [0u8; MAX_RECORD_SIZE];
        let written = records::encode(&meta.schema, record, &mut buf).map_err(Error::Encode)?;
        self.backend.write_file(&path, &buf[..written])?;

        debug!("inserted record {} into {} ({} bytes)", id, table, written);
        Ok(())
    }

    /// Reads and decodes the record stored under `id`.
    pub fn get(&self, table: &str, id: RecordId) -> Result<Record> {
        let meta = self.table(table)?;
        let path = Self::record_path(meta, id);

        let data = match self.backend.read_file(&path, MAX_RECORD_SIZE) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("record {} not found in {}", id, table);
                return Err(Error::NotFound);
            }
            Err(err) => return Err(Error::Io(err)),
        };

        if data.is_empty() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("record file for {} is empty", id),
            )));
        }

        records::decode(&meta.schema, &data).map_err(Error::Decode)
    }

    /// Replaces the record stored under `id`. The record must exist.
    ///
    /// The new bytes go to a `.pr.tmp` file first and are renamed over the
    /// record file, so a failure mid-update leaves the old record intact.
    pub fn update(&self, table: &str, id: RecordId, record: &Record) -> Result<()> {
        let meta = self.table(table)?;
        let path = Self::record_path(meta, id);

        if !self.backend.exists(&path) {
            debug!("record {} not found in {} for update", id, table);
            return Err(Error::NotFound);
        }

        let mut buf = [0u8; MAX_RECORD_SIZE];
        let written = records::encode(&meta.schema, record, &mut buf).map_err(Error::Encode)?;

        let tmp = meta.dir.join(format!("{}{}", id.to_hex(), TMP_FILE_SUFFIX));
        self.backend.write_file(&tmp, &buf[..written])?;
        if !self.backend.rename(&tmp, &path) {
            self.backend.remove_file(&tmp);
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::Other,
                format!("failed to replace record file for {}", id),
            )));
        }

        debug!("updated record {} in {} ({} bytes)", id, table, written);
        Ok(())
    }

    /// Deletes the record stored under `id`. The record must exist.
    pub fn delete(&self, table: &str, id: RecordId) -> Result<()> {
        let meta = self.table(table)?;
        let path = Self::record_path(meta, id);

        if self.backend.remove_file(&path) {
            debug!("deleted record {} from {}", id, table);
            Ok(())
        } else {
            debug!("record {} not found in {} for delete", id, table);
            Err(Error::NotFound)
        }
    }

    /// True if a record file exists for `id`. Does not decode.
    pub fn exists(&self, table: &str, id: RecordId) -> Result<bool> {
        let meta = self.table(table)?;
        Ok(self.backend.exists(&Self::record_path(meta, id)))
    }
}
