//! ndarray integration for record batches
//!
//! Pulls a single field out of every record in a batch as a 1-D ndarray,
//! without materializing the other fields.
//!
//! Enable with the `ndarray` feature flag.

use crate::batch::record_count;
use crate::error::ColumnError;
use crate::parser::read_value;
use crate::typed::Primitive;
use crate::types::Schema;
use ndarray::Array1;

/// Extract field `name` from each record of a batch
///
/// `T` must match the field's type and width exactly.
pub fn column<T: Primitive>(
    bytes: &[u8],
    schema: &Schema,
    name: &str,
) -> Result<Array1<T>, ColumnError> {
    let (offset, field) = schema
        .layout()
        .find(|(_, f)| f.name() == name)
        .ok_or_else(|| ColumnError::UnknownField(name.to_string()))?;

    let mismatch = || ColumnError::TypeMismatch {
        field: name.to_string(),
        field_type: field.field_type(),
        width: field.width(),
        requested_type: T::FIELD_TYPE,
        requested_width: T::WIDTH,
    };
    if field.field_type() != T::FIELD_TYPE || field.width() != T::WIDTH {
        return Err(mismatch());
    }

    let count = record_count(bytes, schema)?;
    let stride = schema.total_width();
    let values = (0..count)
        .map(|i| {
            let start = i * stride + offset;
            let mut slice = &bytes[start..start + field.width()];
            T::from_value(&read_value(&mut slice, field))
        })
        .collect::<Option<Vec<T>>>()
        .ok_or_else(mismatch)?;

    Ok(Array1::from_vec(values))
}
