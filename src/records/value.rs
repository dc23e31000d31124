//! # Owned Values and Records
//!
//! `Record` is what queries return and what inserts accept: a fully-owned
//! row whose lifetime is independent of any buffer. Dropping it releases
//! everything; there is no manual free protocol.

use eyre::{bail, Result};

/// A single owned column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Covers both int4 and int8 columns; the encoder range-checks int4.
    Int(i64),
    Float(f64),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Text(String),
    Blob(Vec<u8>),
}

/// An owned, decoded record: one value per schema column, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn get_bool(&self, idx: usize) -> Result<bool> {
        match self.get(idx) {
            Some(Value::Bool(v)) => Ok(*v),
            Some(other) => bail!("expected BOOL at column {}, got {:?}", idx, other),
            None => bail!("column {} out of bounds", idx),
        }
    }

    pub fn get_int(&self, idx: usize) -> Result<i64> {
        match self.get(idx) {
            Some(Value::Int(v)) => Ok(*v),
            Some(other) => bail!("expected INT at column {}, got {:?}", idx, other),
            None => bail!("column {} out of bounds", idx),
        }
    }

    pub fn get_float(&self, idx: usize) -> Result<f64> {
        match self.get(idx) {
            Some(Value::Float(v)) => Ok(*v),
            Some(other) => bail!("expected FLOAT at column {}, got {:?}", idx, other),
            None => bail!("column {} out of bounds", idx),
        }
    }

    pub fn get_timestamp(&self, idx: usize) -> Result<i64> {
        match self.get(idx) {
            Some(Value::Timestamp(v)) => Ok(*v),
            Some(other) => bail!("expected TIMESTAMP at column {}, got {:?}", idx, other),
            None => bail!("column {} out of bounds", idx),
        }
    }

    pub fn get_text(&self, idx: usize) -> Result<&str> {
        match self.get(idx) {
            Some(Value::Text(s)) => Ok(s),
            Some(other) => bail!("expected TEXT at column {}, got {:?}", idx, other),
            None => bail!("column {} out of bounds", idx),
        }
    }

    pub fn get_blob(&self, idx: usize) -> Result<&[u8]> {
        match self.get(idx) {
            Some(Value::Blob(b)) => Ok(b),
            Some(other) => bail!("expected BLOB at column {}, got {:?}", idx, other),
            None => bail!("column {} out of bounds", idx),
        }
    }

    pub fn is_null(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(Value::Null))
    }

    pub fn column_count(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
