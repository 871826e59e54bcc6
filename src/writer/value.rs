//! Field serialization

use crate::error::EncodeError;
use crate::types::{FieldDescriptor, FieldType, FieldValue};
use bytes::BufMut;

/// Write one field value at its declared width, little-endian
pub fn write_value<B: BufMut>(
    buf: &mut B,
    field: &FieldDescriptor,
    value: &FieldValue,
) -> Result<(), EncodeError> {
    let width = field.width();
    match (field.field_type(), value) {
        (FieldType::SignedInt, FieldValue::Int(v)) => {
            if !fits_signed(*v, width) {
                return Err(overflow(field));
            }
            buf.put_int_le(*v, width);
        }
        (FieldType::UnsignedInt, FieldValue::UInt(v)) => {
            if !fits_unsigned(*v, width) {
                return Err(overflow(field));
            }
            buf.put_uint_le(*v, width);
        }
        (FieldType::Float, FieldValue::Float(v)) => {
            if width == 4 {
                let narrowed = *v as f32;
                if f64::from(narrowed).to_bits() != v.to_bits() {
                    if v.is_finite() && narrowed.is_infinite() {
                        return Err(overflow(field));
                    }
                    return Err(EncodeError::Inexact {
                        field: field.name().to_string(),
                        width,
                    });
                }
                buf.put_f32_le(narrowed);
            } else {
                buf.put_f64_le(*v);
            }
        }
        (FieldType::Bytes, FieldValue::Bytes(b)) => {
            if b.len() != width {
                return Err(EncodeError::BytesLength {
                    field: field.name().to_string(),
                    expected: width,
                    actual: b.len(),
                });
            }
            buf.put_slice(b);
        }
        (expected, v) => {
            return Err(EncodeError::TypeMismatch {
                field: field.name().to_string(),
                expected,
                actual: v.kind(),
            });
        }
    }
    Ok(())
}

fn overflow(field: &FieldDescriptor) -> EncodeError {
    EncodeError::Overflow {
        field: field.name().to_string(),
        field_type: field.field_type(),
        width: field.width(),
    }
}

/// Whether `v` is representable as a `width`-byte two's complement integer
fn fits_signed(v: i64, width: usize) -> bool {
    if width >= 8 {
        return true;
    }
    let bits = 8 * width as u32;
    let min = -(1i64 << (bits - 1));
    let max = (1i64 << (bits - 1)) - 1;
    (min..=max).contains(&v)
}

fn fits_unsigned(v: u64, width: usize) -> bool {
    width >= 8 || v >> (8 * width as u32) == 0
}
