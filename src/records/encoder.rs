//! # Record Encoder
//!
//! Serializes a [`Record`] against a [`Schema`] into a caller-supplied
//! buffer. The buffer length is the hard size bound: a record whose encoded
//! form does not fit is an encode failure, never a truncation.

use eyre::{bail, ensure, Result};

use crate::records::schema::Schema;
use crate::records::value::{Record, Value};

/// Encodes `record` into `buf`, returning the number of bytes written.
///
/// The record must have one value per schema column, each either `Null` or
/// matching the column's type.
pub fn encode(schema: &Schema, record: &Record, buf: &mut [u8]) -> Result<usize> {
    ensure!(
        record.column_count() == schema.column_count(),
        "record has {} columns, schema expects {}",
        record.column_count(),
        schema.column_count()
    );

    let header_len = schema.header_size();
    let fixed_start = header_len;
    let var_start = header_len + schema.total_fixed_size();
    ensure!(
        var_start <= buf.len(),
        "encoded record needs at least {} bytes for header and fixed data, buffer holds {}",
        var_start,
        buf.len()
    );

    buf[..var_start].fill(0);
    buf[0..2].copy_from_slice(&(header_len as u16).to_le_bytes());

    let bitmap_start = 2;
    let offsets_start = bitmap_start + Schema::null_bitmap_size(schema.column_count());

    let mut var_cursor = 0usize;
    for (idx, col) in schema.columns().iter().enumerate() {
        let value = &record.values()[idx];

        if matches!(value, Value::Null) {
            buf[bitmap_start + idx / 8] |= 1 << (idx % 8);
            if let Some(var_idx) = schema.var_column_index(idx) {
                write_var_end(buf, offsets_start, var_idx, var_cursor);
            }
            continue;
        }

        use crate::records::types::DataType;
        match (col.data_type, value) {
            (DataType::Bool, Value::Bool(v)) => {
                write_fixed(buf, fixed_start + schema.fixed_offset(idx), &[*v as u8]);
            }
            (DataType::Int4, Value::Int(v)) => {
                let Ok(narrow) = i32::try_from(*v) else {
                    bail!("value {} overflows int4 column '{}'", v, col.name);
                };
                write_fixed(
                    buf,
                    fixed_start + schema.fixed_offset(idx),
                    &narrow.to_le_bytes(),
                );
            }
            (DataType::Int8, Value::Int(v)) => {
                write_fixed(
                    buf,
                    fixed_start + schema.fixed_offset(idx),
                    &v.to_le_bytes(),
                );
            }
            (DataType::Float8, Value::Float(v)) => {
                write_fixed(
                    buf,
                    fixed_start + schema.fixed_offset(idx),
                    &v.to_le_bytes(),
                );
            }
            (DataType::Timestamp, Value::Timestamp(v)) => {
                write_fixed(
                    buf,
                    fixed_start + schema.fixed_offset(idx),
                    &v.to_le_bytes(),
                );
            }
            (DataType::Text, Value::Text(s)) => {
                var_cursor =
                    append_var(buf, schema, offsets_start, var_start, var_cursor, idx, s.as_bytes())?;
            }
            (DataType::Blob, Value::Blob(b)) => {
                var_cursor =
                    append_var(buf, schema, offsets_start, var_start, var_cursor, idx, b)?;
            }
            (expected, got) => {
                bail!(
                    "column '{}' expects {:?}, record holds {:?}",
                    col.name,
                    expected,
                    got
                );
            }
        }
    }

    Ok(var_start + var_cursor)
}

fn write_fixed(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

fn write_var_end(buf: &mut [u8], offsets_start: usize, var_idx: usize, end: usize) {
    let slot = offsets_start + var_idx * 2;
    buf[slot..slot + 2].copy_from_slice(&(end as u16).to_le_bytes());
}

fn append_var(
    buf: &mut [u8],
    schema: &Schema,
    offsets_start: usize,
    var_start: usize,
    var_cursor: usize,
    col_idx: usize,
    bytes: &[u8],
) -> Result<usize> {
    let end = var_cursor + bytes.len();
    ensure!(
        var_start + end <= buf.len(),
        "encoded record exceeds the {}-byte bound at column {}",
        buf.len(),
        col_idx
    );
    ensure!(
        end <= u16::MAX as usize,
        "variable data of {} bytes overflows the offset table",
        end
    );

    buf[var_start + var_cursor..var_start + end].copy_from_slice(bytes);
    let var_idx = schema
        .var_column_index(col_idx)
        .ok_or_else(|| eyre::eyre!("column {} is not a variable column", col_idx))?;
    write_var_end(buf, offsets_start, var_idx, end);
    Ok(end)
}
