//! Binary parser for fixrec records
//!
//! The buffer length is checked against the schema before any field is
//! read, so a decode either yields a complete record or nothing.

mod value;

pub use value::read_value;

use crate::error::DecodeError;
use crate::types::{Record, Schema};
use bytes::Buf;
use tracing::{debug, trace};

/// Decode a record from exactly `schema.total_width()` bytes
pub fn decode(bytes: &[u8], schema: &Schema) -> Result<Record, DecodeError> {
    check_len(bytes.len(), schema.total_width())?;
    let mut cursor = bytes;
    let record = read_record(&mut cursor, schema);
    debug_assert!(cursor.is_empty());
    trace!(bytes = bytes.len(), fields = schema.len(), "decoded record");
    Ok(record)
}

pub(crate) fn check_len(actual: usize, expected: usize) -> Result<(), DecodeError> {
    if actual != expected {
        debug!(expected, actual, "buffer length mismatch");
        return Err(DecodeError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Read one record's fields; `buf` must hold at least the schema's width
pub(crate) fn read_record<B: Buf>(buf: &mut B, schema: &Schema) -> Record {
    let mut record = Record::with_capacity(schema.len());
    for field in schema.fields() {
        let value = read_value(buf, field);
        record.push_unchecked(field.name().to_string(), value);
    }
    record
}
