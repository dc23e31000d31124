//! # Error Types
//!
//! This module defines the flat error taxonomy shared by every database
//! operation. There is no hierarchy: each failure maps to exactly one kind,
//! and every error is returned to the immediate caller. Nothing is retried.
//!
//! ## Error Kinds
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | `Invalid` | bad parameters, unregistered table, duplicate id on insert |
//! | `NotFound` | absent record for get/update/delete |
//! | `Io` | open/read/write failure, empty record file, short write |
//! | `Decode` | codec could not parse stored bytes |
//! | `Encode` | codec could not serialize a record (including the size bound) |
//!
//! Decode failures hit *during a table scan* are logged and skipped by the
//! query engine rather than surfaced, so a single corrupt file never aborts a
//! bulk read.

use thiserror::Error;

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad parameters, unregistered table, or duplicate identifier on insert.
    #[error("invalid: {0}")]
    Invalid(String),

    /// The identifier has no record file in the table directory.
    #[error("record not found")]
    NotFound,

    /// Physical read/write/open failure, or an empty record file.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The codec could not parse the stored bytes.
    #[error("record decode failed: {0}")]
    Decode(eyre::Report),

    /// The codec could not serialize the record.
    #[error("record encode failed: {0}")]
    Encode(eyre::Report),
}
