//! # Record Codec
//!
//! Schema-driven binary serialization for records. The engine treats this
//! module as a black box with two entry points:
//!
//! ```ignore
//! let written = records::encode(&schema, &record, &mut buf)?;  // buf is bounded
//! let record = records::decode(&schema, &bytes)?;
//! ```
//!
//! ## Record Binary Layout
//!
//! ```text
//! +------------------+------------------+------------------+---------------+-------------+
//! | Header Length    | Null Bitmap      | Offset Table     | Fixed Data    | Var Data    |
//! | (u16 LE)         | [u8; (N+7)/8]    | [u16 LE; M]      | [u8; F]       | [u8; ...]   |
//! +------------------+------------------+------------------+---------------+-------------+
//! ```
//!
//! | Component | Description |
//! |-----------|-------------|
//! | **Header Length** | total header size; must match the schema's layout exactly |
//! | **Null Bitmap** | 1 bit per column, `1` = NULL |
//! | **Offset Table** | end offsets into the var section, one per variable column |
//! | **Fixed Data** | fixed-width values at schema-computed offsets, zeros when NULL |
//! | **Var Data** | concatenated text/blob payloads |
//!
//! Types come from the schema, not from the stored bytes, so the layout
//! carries no per-row type tags. The decoder validates the header length,
//! offset-table monotonicity, and the exact payload length, which makes it
//! reject foreign bytes early instead of producing garbage values.
//!
//! ## Module Structure
//!
//! - `types`: `DataType` and `ColumnDef`
//! - `schema`: `Schema` with pre-computed fixed offsets
//! - `value`: owned `Value` and `Record` types returned to callers
//! - `encoder`: record → bytes, bounded by the caller's buffer
//! - `decoder`: bytes → record, strict validation

pub mod decoder;
pub mod encoder;
pub mod schema;
pub mod types;
pub mod value;

#[cfg(test)]
mod tests;

pub use decoder::decode;
pub use encoder::encode;
pub use schema::Schema;
pub use types::{ColumnDef, DataType};
pub use value::{Record, Value};
