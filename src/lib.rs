//! # LoDB - Synchronous Filesystem Record Store
//!
//! LoDB is an embedded, synchronous database that stores schema-described
//! binary records as individual files, one record per file, under a
//! per-table directory. Queries are full-table scans with query-style
//! shaping: predicate filter, comparator sort, count limit.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lodb::{ColumnDef, Database, DataType, Record, RecordId, Schema, Value};
//!
//! let mut db = Database::open_local("./data", "bbs")?;
//!
//! let users = Schema::new(vec![
//!     ColumnDef::new("name", DataType::Text),
//!     ColumnDef::new("node_id", DataType::Int8),
//! ]);
//! db.register_table("users", users, 64)?;
//!
//! let id = RecordId::derive(Some("alice"), 42);
//! db.insert("users", id, &Record::new(vec![
//!     Value::Text("alice".into()),
//!     Value::Int(0x10),
//! ]))?;
//!
//! let admins = db
//!     .select("users")
//!     .filter(|r| r.get_int(1).unwrap_or(0) < 0x20)
//!     .order_by(|a, b| a.get_text(0).unwrap_or("").cmp(b.get_text(0).unwrap_or("")))
//!     .limit(10)
//!     .fetch()?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Public API (Database)         │
//! ├──────────────────┬──────────────────┤
//! │   Record Store   │   Query Engine   │
//! │  (dml: 1 record  │  (scan: filter → │
//! │    = 1 file)     │   sort → limit)  │
//! ├──────────────────┴──────────────────┤
//! │   Table Registry │ Record Codec     │
//! │   (catalog)      │ (records)        │
//! ├─────────────────────────────────────┤
//! │     File Backend (storage)          │
//! │     mutex-serialized physical I/O   │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## File Layout
//!
//! ```text
//! {prefix}/
//! └── lodb/
//!     └── <db_name>/
//!         ├── users/
//!         │   ├── 00c8f3a91b2d4e07.pr    # one encoded record
//!         │   └── 9f31d07ab554c1e2.pr
//!         └── sessions/
//!             └── 47e1a90cd3f8b625.pr
//! ```
//!
//! Record filenames are the 16-digit hex form of the 64-bit record
//! identifier (high word first). Encoded records are bounded at 2048 bytes.
//!
//! ## Design Properties
//!
//! - **Synchronous**: every operation completes on the calling thread; no
//!   background workers, no cancellation, no retries.
//! - **Schema-agnostic engine**: tables bind a name to a `Schema` and the
//!   engine never interprets record contents beyond the codec contract.
//! - **Best-effort scans**: a corrupt record file is logged and skipped by
//!   queries instead of failing the whole scan.
//! - **Atomic replace**: updates write a temp file and rename it over the
//!   record, so an interrupted update leaves the old value.
//! - **Unordered scans**: directory iteration order is backend-defined;
//!   deterministic query results require an explicit comparator.
//!
//! ## Module Overview
//!
//! - [`database`]: public API - registry, record CRUD, queries
//! - [`records`]: schema-driven record codec
//! - [`storage`]: file backend trait and the local-filesystem backend
//! - [`id`]: 64-bit record identifiers (keyed, random, composite)
//! - [`config`]: on-disk format constants
//! - [`error`]: the flat error taxonomy

pub mod config;
pub mod database;
pub mod error;
pub mod id;
pub mod records;
pub mod storage;

pub use database::{Database, Select, TableMeta};
pub use error::{Error, Result};
pub use id::RecordId;
pub use records::{ColumnDef, DataType, Record, Schema, Value};
pub use storage::{DirEntry, FileBackend, LocalFs};
