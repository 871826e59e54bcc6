//! Field parsing

use crate::types::{FieldDescriptor, FieldType, FieldValue};
use bytes::Buf;

/// Read one field value at its declared width, little-endian
///
/// The caller guarantees `buf` holds at least `field.width()` bytes; the
/// schema's widths already passed validation, so every bit pattern decodes.
pub fn read_value<B: Buf>(buf: &mut B, field: &FieldDescriptor) -> FieldValue {
    let width = field.width();
    match field.field_type() {
        FieldType::SignedInt => {
            let raw = buf.get_uint_le(width);
            let shift = 64 - 8 * width as u32;
            FieldValue::Int(((raw << shift) as i64) >> shift)
        }
        FieldType::UnsignedInt => FieldValue::UInt(buf.get_uint_le(width)),
        FieldType::Float if width == 4 => FieldValue::Float(f64::from(buf.get_f32_le())),
        FieldType::Float => FieldValue::Float(buf.get_f64_le()),
        FieldType::Bytes => {
            let mut data = vec![0u8; width];
            buf.copy_to_slice(&mut data);
            FieldValue::Bytes(data)
        }
    }
}
