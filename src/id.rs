//! # Record Identifiers
//!
//! A [`RecordId`] is a 64-bit value naming exactly one record within a table.
//! Two derivation modes exist:
//!
//! - **Keyed**: SHA-256 over the UTF-8 seed followed by the 8 little-endian
//!   bytes of the salt; the first 8 digest bytes become the id. The same
//!   seed and salt always produce the same id, which is how name-derived
//!   primary keys work (e.g. a username hashed with the host node id as
//!   salt).
//! - **Random**: when no natural key exists, a `"<now_ms>:<random_u32>"`
//!   seed is synthesized and pushed through the same keyed derivation.
//!
//! Composite keys concatenate two hex-encoded ids with a `:` separator and
//! derive from that, giving a deterministic id for a *pair* of records
//! (e.g. per-user read markers on shared items).
//!
//! ## Filename Form
//!
//! `to_hex` renders the high 32 bits then the low 32 bits, zero-padded to 16
//! digits. This is the record's filename stem, and `from_hex` inverts it
//! accepting either letter case.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

use crate::config::ID_HEX_LEN;

/// 64-bit record identifier, unique within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    /// Derives an identifier from `seed` and `salt`.
    ///
    /// With no seed, a timestamp-and-random seed is synthesized, making the
    /// result effectively unique rather than reproducible. This never fails.
    pub fn derive(seed: Option<&str>, salt: u64) -> Self {
        match seed {
            Some(seed) => Self::hash_seed(seed, salt),
            None => {
                let now_ms = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis())
                    .unwrap_or(0);
                let seed = format!("{}:{}", now_ms, rand::random::<u32>());
                Self::hash_seed(&seed, salt)
            }
        }
    }

    /// Shorthand for `derive(None, 0)`: a fresh identifier with no natural key.
    pub fn random() -> Self {
        Self::derive(None, 0)
    }

    /// Deterministic identifier for a pair of records: the keyed derivation
    /// of `"<hex(a)>:<hex(b)>"`. Argument order matters.
    pub fn composite(a: RecordId, b: RecordId, salt: u64) -> Self {
        Self::hash_seed(&format!("{}:{}", a.to_hex(), b.to_hex()), salt)
    }

    fn hash_seed(seed: &str, salt: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.update(salt.to_le_bytes());
        let digest = hasher.finalize();

        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        RecordId(u64::from_le_bytes(head))
    }

    /// Fixed-width hex form used as the record filename stem.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Parses the 16-digit hex form, either letter case. Returns `None` for
    /// any other length or for non-hex characters.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != ID_HEX_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u64::from_str_radix(hex, 16).ok().map(RecordId)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        RecordId(raw)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}{:08x}", self.0 >> 32, self.0 & 0xFFFF_FFFF)
    }
}
