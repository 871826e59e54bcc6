//! Serialization of records
//!
//! Every field is written at its declared width in schema order, with no
//! header, padding or trailer.

mod value;

pub use value::write_value;

use crate::error::EncodeError;
use crate::types::{Record, Schema};
use bytes::BufMut;
use tracing::{debug, trace};

/// Encode a record into a freshly allocated buffer
///
/// The buffer is exactly `schema.total_width()` bytes. On error nothing is
/// returned; fields the record has but the schema does not name are ignored.
pub fn encode(record: &Record, schema: &Schema) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(schema.total_width());
    write_record(&mut buf, record, schema)
        .inspect_err(|e| debug!(error = %e, "encode failed"))?;
    debug_assert_eq!(buf.len(), schema.total_width());
    trace!(bytes = buf.len(), fields = schema.len(), "encoded record");
    Ok(buf)
}

/// Append a record's fields to `buf`
pub(crate) fn write_record<B: BufMut>(
    buf: &mut B,
    record: &Record,
    schema: &Schema,
) -> Result<(), EncodeError> {
    for field in schema.fields() {
        let value = record
            .get(field.name())
            .ok_or_else(|| EncodeError::MissingField(field.name().to_string()))?;
        write_value(buf, field, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn xyz() -> Schema {
        Schema::builder()
            .signed("x", 4)
            .signed("y", 4)
            .signed("z", 4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_encode_xyz() {
        let record = Record::new().with("x", 1i32).with("y", 2i32).with("z", 4i32);
        let bytes = encode(&record, &xyz()).unwrap();
        assert_eq!(bytes, [1, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0]);
    }

    #[test]
    fn test_encode_uses_schema_order() {
        let record = Record::new().with("z", 4i32).with("x", 1i32).with("y", 2i32);
        let bytes = encode(&record, &xyz()).unwrap();
        assert_eq!(bytes, [1, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0]);
    }

    #[test]
    fn test_encode_ignores_extra_fields() {
        let record = Record::new()
            .with("x", 1i32)
            .with("y", 2i32)
            .with("z", 4i32)
            .with("w", 9i32);
        assert_eq!(encode(&record, &xyz()).unwrap().len(), 12);
    }

    #[test]
    fn test_encode_missing_field() {
        let record = Record::new().with("x", 1i32).with("z", 4i32);
        let err = encode(&record, &xyz()).unwrap_err();
        assert!(matches!(err, EncodeError::MissingField(name) if name == "y"));
    }

    #[test]
    fn test_encode_empty_schema() {
        let record = Record::new().with("x", 1i32);
        assert!(encode(&record, &Schema::empty()).unwrap().is_empty());
        assert!(encode(&Record::new(), &Schema::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_encode_mixed_fields() {
        let schema = Schema::builder()
            .unsigned("id", 2)
            .float("ratio", 4)
            .bytes("tag", 2)
            .build()
            .unwrap();
        let record = Record::new()
            .with("id", 0x0102u16)
            .with("ratio", 0.5f32)
            .with("tag", FieldValue::Bytes(b"ok".to_vec()));

        let bytes = encode(&record, &schema).unwrap();
        let mut expected = vec![0x02, 0x01];
        expected.extend_from_slice(&0.5f32.to_le_bytes());
        expected.extend_from_slice(b"ok");
        assert_eq!(bytes, expected);
    }
}
