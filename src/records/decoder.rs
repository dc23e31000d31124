//! # Record Decoder
//!
//! Parses codec bytes back into an owned [`Record`]. Validation is strict:
//! the header length must match the schema's layout exactly, the offset
//! table must be monotonic and in bounds, and the payload must end exactly
//! where the last offset says it does. Bytes that were not produced by the
//! encoder for the same schema fail here rather than decoding into nonsense.

use eyre::{bail, ensure, Result};

use crate::records::schema::Schema;
use crate::records::types::DataType;
use crate::records::value::{Record, Value};

/// Decodes `data` against `schema` into an owned record.
pub fn decode(schema: &Schema, data: &[u8]) -> Result<Record> {
    ensure!(data.len() >= 2, "record data too short for a header");

    let header_len = u16::from_le_bytes([data[0], data[1]]) as usize;
    ensure!(
        header_len == schema.header_size(),
        "header length {} does not match schema layout ({} expected)",
        header_len,
        schema.header_size()
    );

    let fixed_start = header_len;
    let var_start = header_len + schema.total_fixed_size();
    ensure!(
        data.len() >= var_start,
        "record truncated: {} bytes, fixed data ends at {}",
        data.len(),
        var_start
    );

    let bitmap = &data[2..2 + Schema::null_bitmap_size(schema.column_count())];
    let offsets = &data[2 + bitmap.len()..header_len];

    let var_len = data.len() - var_start;
    let mut prev_end = 0usize;
    for var_idx in 0..schema.var_column_count() {
        let end =
            u16::from_le_bytes([offsets[var_idx * 2], offsets[var_idx * 2 + 1]]) as usize;
        ensure!(end >= prev_end, "offset table is not monotonic");
        ensure!(end <= var_len, "offset table points past the payload");
        prev_end = end;
    }
    ensure!(
        prev_end == var_len,
        "{} trailing bytes after variable data",
        var_len - prev_end
    );

    let var_bounds = |var_idx: usize| -> (usize, usize) {
        let end =
            u16::from_le_bytes([offsets[var_idx * 2], offsets[var_idx * 2 + 1]]) as usize;
        let start = if var_idx == 0 {
            0
        } else {
            u16::from_le_bytes([offsets[(var_idx - 1) * 2], offsets[(var_idx - 1) * 2 + 1]])
                as usize
        };
        (var_start + start, var_start + end)
    };

    let mut values = Vec::with_capacity(schema.column_count());
    for (idx, col) in schema.columns().iter().enumerate() {
        if bitmap[idx / 8] & (1 << (idx % 8)) != 0 {
            values.push(Value::Null);
            continue;
        }

        let value = match col.data_type {
            DataType::Bool => {
                Value::Bool(data[fixed_start + schema.fixed_offset(idx)] != 0)
            }
            DataType::Int4 => {
                let v = i32::from_le_bytes(fixed_bytes(data, fixed_start, schema, idx)?);
                Value::Int(v as i64)
            }
            DataType::Int8 => {
                Value::Int(i64::from_le_bytes(fixed_bytes(data, fixed_start, schema, idx)?))
            }
            DataType::Float8 => {
                Value::Float(f64::from_le_bytes(fixed_bytes(data, fixed_start, schema, idx)?))
            }
            DataType::Timestamp => Value::Timestamp(i64::from_le_bytes(fixed_bytes(
                data,
                fixed_start,
                schema,
                idx,
            )?)),
            DataType::Text => {
                let var_idx = schema
                    .var_column_index(idx)
                    .ok_or_else(|| eyre::eyre!("column {} is not a variable column", idx))?;
                let (start, end) = var_bounds(var_idx);
                match std::str::from_utf8(&data[start..end]) {
                    Ok(s) => Value::Text(s.to_string()),
                    Err(err) => bail!("column '{}' holds invalid utf-8: {}", col.name, err),
                }
            }
            DataType::Blob => {
                let var_idx = schema
                    .var_column_index(idx)
                    .ok_or_else(|| eyre::eyre!("column {} is not a variable column", idx))?;
                let (start, end) = var_bounds(var_idx);
                Value::Blob(data[start..end].to_vec())
            }
        };
        values.push(value);
    }

    Ok(Record::new(values))
}

fn fixed_bytes<const LEN: usize>(
    data: &[u8],
    fixed_start: usize,
    schema: &Schema,
    col_idx: usize,
) -> Result<[u8; LEN]> {
    let offset = fixed_start + schema.fixed_offset(col_idx);
    data[offset..offset + LEN]
        .try_into()
        .map_err(|_| eyre::eyre!("insufficient data for column {}", col_idx))
}
