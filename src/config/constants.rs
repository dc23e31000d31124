//! # Format Constants
//!
//! These constants define the on-disk layout:
//!
//! ```text
//! {prefix}/lodb/<db_name>/<table_name>/<16-hex-digit-id>.pr
//! ```
//!
//! The layout is a compatibility surface. Changing `DB_ROOT_DIR`,
//! `RECORD_FILE_SUFFIX`, or `ID_HEX_LEN` makes existing databases unreadable,
//! so treat them as frozen.
//!
//! ## Dependencies
//!
//! ```text
//! MAX_RECORD_SIZE (2048 bytes)
//!       │
//!       ├─> encoder rejects records whose encoded form exceeds this
//!       └─> reader never pulls more than this many bytes from a record file
//!
//! RECORD_FILE_SUFFIX (".pr")
//!       │
//!       ├─> TMP_FILE_SUFFIX (".pr.tmp", must not end in ".pr" or scans
//!       │     would pick up in-flight updates)
//!       └─> scan/count recognize record files by this suffix
//! ```

/// Maximum encoded size of a single record in bytes.
/// Exceeding this bound is an encode failure, not a truncation.
pub const MAX_RECORD_SIZE: usize = 2048;

/// Root directory for all databases, directly under the backend prefix.
pub const DB_ROOT_DIR: &str = "lodb";

/// Suffix of record files inside a table directory.
pub const RECORD_FILE_SUFFIX: &str = ".pr";

/// Suffix of the scratch file written during an update, renamed over the
/// record file on success. Never matches `RECORD_FILE_SUFFIX`, so scans and
/// counts ignore in-flight updates.
pub const TMP_FILE_SUFFIX: &str = ".pr.tmp";

/// Width of a hex-encoded record identifier: high 32 bits then low 32 bits,
/// zero-padded.
pub const ID_HEX_LEN: usize = 16;

const _: () = assert!(
    MAX_RECORD_SIZE >= 2,
    "a record file must at least hold the codec header length"
);
