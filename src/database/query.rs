//! # Query Engine
//!
//! Full-table scans with a fixed three-phase pipeline, always in this
//! order:
//!
//! 1. **Filter** — decode every record file in the table directory and keep
//!    the ones the predicate accepts. Undecodable files and malformed
//!    filenames are logged and skipped; a single bad file never aborts the
//!    scan.
//! 2. **Sort** — stable ascending order by the caller's comparator, when
//!    supplied. Without one, results keep the backend's directory iteration
//!    order, which is filesystem-dependent and NOT stable across calls or
//!    platforms. Callers that need deterministic results must supply a
//!    comparator.
//! 3. **Limit** — truncate to the first `limit` survivors when `limit > 0`.
//!
//! `count` without a filter is a fast path: it counts record filenames
//! without decoding, so corrupt-but-present files still count. With a
//! filter it scans like `fetch` and counts the survivors.

use std::cmp::Ordering;
use std::io;

use tracing::{debug, warn};

use crate::config::RECORD_FILE_SUFFIX;
use crate::database::catalog::TableMeta;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::id::RecordId;
use crate::records::Record;

/// Builder for a table query: optional filter, optional comparator,
/// optional limit.
///
/// ```ignore
/// let top = db
///     .select("users")
///     .filter(|r| r.get_bool(2).unwrap_or(false))
///     .order_by(|a, b| a.get_text(1).unwrap_or("").cmp(b.get_text(1).unwrap_or("")))
///     .limit(10)
///     .fetch()?;
/// ```
pub struct Select<'db> {
    db: &'db Database,
    table: String,
    filter: Option<Box<dyn Fn(&Record) -> bool + 'db>>,
    order: Option<Box<dyn Fn(&Record, &Record) -> Ordering + 'db>>,
    limit: usize,
}

impl Database {
    /// Starts a query over `table`.
    pub fn select(&self, table: &str) -> Select<'_> {
        Select {
            db: self,
            table: table.to_string(),
            filter: None,
            order: None,
            limit: 0,
        }
    }

    /// Counts all records of `table` without decoding them.
    pub fn count(&self, table: &str) -> Result<u64> {
        self.select(table).count()
    }
}

impl<'db> Select<'db> {
    /// Keeps only records the predicate accepts.
    pub fn filter(mut self, predicate: impl Fn(&Record) -> bool + 'db) -> Self {
        self.filter = Some(Box::new(predicate));
        self
    }

    /// Sorts results ascending by a three-way comparator. The sort is
    /// stable.
    pub fn order_by(mut self, comparator: impl Fn(&Record, &Record) -> Ordering + 'db) -> Self {
        self.order = Some(Box::new(comparator));
        self
    }

    /// Caps the number of results; `0` means no limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Runs the filter → sort → limit pipeline and returns the surviving
    /// records as an owned vector.
    pub fn fetch(self) -> Result<Vec<Record>> {
        let meta = self.db.table(&self.table)?;

        let mut results = self.db.scan(meta, self.filter.as_deref())?;
        debug!("select from {}: {} records after filtering", self.table, results.len());

        if let Some(comparator) = &self.order {
            results.sort_by(|a, b| comparator(a, b));
        }

        if self.limit > 0 && results.len() > self.limit {
            results.truncate(self.limit);
        }

        Ok(results)
    }

    /// Counts matching records. Without a filter this only looks at
    /// filenames; with one it decodes like [`Select::fetch`].
    pub fn count(self) -> Result<u64> {
        let meta = self.db.table(&self.table)?;

        if self.filter.is_some() {
            return Ok(self.db.scan(meta, self.filter.as_deref())?.len() as u64);
        }

        let entries = match self.db.backend.read_dir(&meta.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(Error::Io(err)),
        };
        Ok(entries
            .iter()
            .filter(|e| !e.is_dir && e.name.ends_with(RECORD_FILE_SUFFIX))
            .count() as u64)
    }
}

impl Database {
    /// Phase 1 of the pipeline: decode every record file, apply the filter.
    /// Skips subdirectories, non-record names, malformed identifier stems,
    /// and records that fail to decode.
    pub(crate) fn scan(
        &self,
        meta: &TableMeta,
        filter: Option<&(dyn Fn(&Record) -> bool + '_)>,
    ) -> Result<Vec<Record>> {
        let entries = match self.backend.read_dir(&meta.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("table directory {} is absent, empty scan", meta.dir.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        let mut results = Vec::new();
        for entry in entries {
            if entry.is_dir {
                continue;
            }
            let Some(stem) = entry.name.strip_suffix(RECORD_FILE_SUFFIX) else {
                debug!("skipping non-record file {}", entry.name);
                continue;
            };
            let Some(id) = RecordId::from_hex(stem) else {
                warn!("skipping record file with malformed identifier: {}", entry.name);
                continue;
            };

            match self.get(&meta.name, id) {
                Ok(record) => {
                    if filter.map_or(true, |keep| keep(&record)) {
                        results.push(record);
                    }
                }
                Err(err) => {
                    warn!("skipping unreadable record {} during scan: {}", id, err);
                }
            }
        }

        Ok(results)
    }
}
