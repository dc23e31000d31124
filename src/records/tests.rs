//! Tests for the record codec

use super::*;

fn user_schema() -> Schema {
    Schema::new(vec![
        ColumnDef::new("id", DataType::Int8),
        ColumnDef::new("name", DataType::Text),
        ColumnDef::new("active", DataType::Bool),
        ColumnDef::new("score", DataType::Float8),
        ColumnDef::new("avatar", DataType::Blob),
        ColumnDef::new("created", DataType::Timestamp),
    ])
}

#[test]
fn schema_tracks_fixed_and_variable_columns() {
    let schema = user_schema();

    assert_eq!(schema.column_count(), 6);
    assert_eq!(schema.var_column_count(), 2);

    assert_eq!(schema.var_column_index(1), Some(0));
    assert_eq!(schema.var_column_index(4), Some(1));
    assert_eq!(schema.var_column_index(0), None);
}

#[test]
fn schema_calculates_fixed_offsets() {
    let schema = Schema::new(vec![
        ColumnDef::new("a", DataType::Int4),
        ColumnDef::new("b", DataType::Int8),
        ColumnDef::new("c", DataType::Text),
        ColumnDef::new("d", DataType::Bool),
    ]);

    assert_eq!(schema.fixed_offset(0), 0);
    assert_eq!(schema.fixed_offset(1), 4);
    assert_eq!(schema.fixed_offset(2), 12);
    assert_eq!(schema.fixed_offset(3), 12);
    assert_eq!(schema.total_fixed_size(), 13);
}

#[test]
fn schema_header_size_counts_length_bitmap_and_offsets() {
    // 2 (length) + 1 (bitmap for 6 columns) + 4 (two var offsets)
    assert_eq!(user_schema().header_size(), 7);
}

#[test]
fn encode_decode_round_trips_all_types() {
    let schema = user_schema();
    let record = Record::new(vec![
        Value::Int(42),
        Value::Text("alice".to_string()),
        Value::Bool(true),
        Value::Float(99.5),
        Value::Blob(vec![0xde, 0xad, 0xbe, 0xef]),
        Value::Timestamp(1_700_000_000_000),
    ]);

    let mut buf = [0u8; 2048];
    let written = encode(&schema, &record, &mut buf).unwrap();
    let decoded = decode(&schema, &buf[..written]).unwrap();

    assert_eq!(decoded, record);
}

#[test]
fn encode_decode_round_trips_nulls() {
    let schema = user_schema();
    let record = Record::new(vec![
        Value::Int(7),
        Value::Null,
        Value::Null,
        Value::Float(0.0),
        Value::Null,
        Value::Timestamp(0),
    ]);

    let mut buf = [0u8; 2048];
    let written = encode(&schema, &record, &mut buf).unwrap();
    let decoded = decode(&schema, &buf[..written]).unwrap();

    assert!(decoded.is_null(1));
    assert!(decoded.is_null(2));
    assert!(decoded.is_null(4));
    assert_eq!(decoded, record);
}

#[test]
fn encode_decode_round_trips_empty_text_and_blob() {
    let schema = Schema::new(vec![
        ColumnDef::new("t", DataType::Text),
        ColumnDef::new("b", DataType::Blob),
    ]);
    let record = Record::new(vec![
        Value::Text(String::new()),
        Value::Blob(Vec::new()),
    ]);

    let mut buf = [0u8; 64];
    let written = encode(&schema, &record, &mut buf).unwrap();
    let decoded = decode(&schema, &buf[..written]).unwrap();

    assert_eq!(decoded.get_text(0).unwrap(), "");
    assert_eq!(decoded.get_blob(1).unwrap(), b"");
}

#[test]
fn encode_rejects_column_count_mismatch() {
    let schema = user_schema();
    let record = Record::new(vec![Value::Int(1)]);

    let mut buf = [0u8; 2048];
    let err = encode(&schema, &record, &mut buf).unwrap_err();
    assert!(err.to_string().contains("columns"));
}

#[test]
fn encode_rejects_type_mismatch() {
    let schema = Schema::new(vec![ColumnDef::new("id", DataType::Int8)]);
    let record = Record::new(vec![Value::Text("not an int".to_string())]);

    let mut buf = [0u8; 64];
    assert!(encode(&schema, &record, &mut buf).is_err());
}

#[test]
fn encode_rejects_int4_overflow() {
    let schema = Schema::new(vec![ColumnDef::new("small", DataType::Int4)]);
    let record = Record::new(vec![Value::Int(i64::from(i32::MAX) + 1)]);

    let mut buf = [0u8; 64];
    let err = encode(&schema, &record, &mut buf).unwrap_err();
    assert!(err.to_string().contains("int4"));
}

#[test]
fn encode_enforces_the_buffer_bound() {
    let schema = Schema::new(vec![ColumnDef::new("body", DataType::Text)]);
    let record = Record::new(vec![Value::Text("x".repeat(4096))]);

    let mut buf = [0u8; 2048];
    assert!(encode(&schema, &record, &mut buf).is_err());
}

#[test]
fn encode_fits_exactly_at_the_bound() {
    let schema = Schema::new(vec![ColumnDef::new("body", DataType::Blob)]);
    // header is 2 + 1 + 2 = 5 bytes, so 2043 payload bytes land exactly on 2048
    let record = Record::new(vec![Value::Blob(vec![1u8; 2043])]);

    let mut buf = [0u8; 2048];
    let written = encode(&schema, &record, &mut buf).unwrap();
    assert_eq!(written, 2048);

    let decoded = decode(&schema, &buf[..written]).unwrap();
    assert_eq!(decoded.get_blob(0).unwrap().len(), 2043);
}

#[test]
fn decode_rejects_empty_and_tiny_input() {
    let schema = user_schema();
    assert!(decode(&schema, &[]).is_err());
    assert!(decode(&schema, &[0x07]).is_err());
}

#[test]
fn decode_rejects_wrong_header_length() {
    let schema = user_schema();
    let data = vec![0xff, 0x00, 0, 0, 0, 0, 0, 0, 0, 0];
    assert!(decode(&schema, &data).is_err());
}

#[test]
fn decode_rejects_foreign_bytes() {
    let schema = user_schema();
    assert!(decode(&schema, b"this is not a record at all").is_err());
}

#[test]
fn decode_rejects_truncated_payload() {
    let schema = user_schema();
    let record = Record::new(vec![
        Value::Int(1),
        Value::Text("hello".to_string()),
        Value::Bool(false),
        Value::Float(1.0),
        Value::Blob(vec![9; 8]),
        Value::Timestamp(5),
    ]);

    let mut buf = [0u8; 2048];
    let written = encode(&schema, &record, &mut buf).unwrap();
    assert!(decode(&schema, &buf[..written - 3]).is_err());
}

#[test]
fn decode_rejects_invalid_utf8_text() {
    let schema = Schema::new(vec![ColumnDef::new("t", DataType::Text)]);

    // hand-built: header (2 + 1 + 2 = 5), one var column ending at 2
    let data = vec![0x05, 0x00, 0x00, 0x02, 0x00, 0xff, 0xfe];
    let err = decode(&schema, &data).unwrap_err();
    assert!(err.to_string().contains("utf-8"));
}

#[test]
fn record_typed_getters_enforce_types() {
    let record = Record::new(vec![Value::Int(3), Value::Text("x".to_string())]);

    assert_eq!(record.get_int(0).unwrap(), 3);
    assert_eq!(record.get_text(1).unwrap(), "x");
    assert!(record.get_text(0).is_err());
    assert!(record.get_int(2).is_err());
}
