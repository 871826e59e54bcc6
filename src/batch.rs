//! Fixed-stride record batches
//!
//! A batch is records laid end to end with no separators. Each record takes
//! exactly `schema.total_width()` bytes, so record `i` starts at
//! `i * stride`.

use crate::error::{DecodeError, EncodeError};
use crate::parser::read_record;
use crate::types::{Record, Schema};
use crate::writer::write_record;
use tracing::{debug, trace};

/// Encode records back to back; fails as a whole if any record fails
pub fn encode_batch<'r, I>(records: I, schema: &Schema) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = &'r Record>,
{
    let records = records.into_iter();
    let mut buf = Vec::with_capacity(records.size_hint().0 * schema.total_width());
    let mut count = 0usize;
    for (index, record) in records.enumerate() {
        write_record(&mut buf, record, schema).map_err(|e| {
            debug!(index, error = %e, "batch encode failed");
            EncodeError::InRecord {
                index,
                source: Box::new(e),
            }
        })?;
        count += 1;
    }
    trace!(records = count, bytes = buf.len(), "encoded batch");
    Ok(buf)
}

/// Number of records in a batch, validating alignment
///
/// For a zero-width schema only the empty buffer is accepted; it holds zero
/// records.
pub fn record_count(bytes: &[u8], schema: &Schema) -> Result<usize, DecodeError> {
    let stride = schema.total_width();
    let len = bytes.len();
    let aligned = if stride == 0 {
        len == 0
    } else {
        len % stride == 0
    };
    if !aligned {
        debug!(len, stride, "misaligned batch");
        return Err(DecodeError::Misaligned { len, stride });
    }
    Ok(if stride == 0 { 0 } else { len / stride })
}

/// Lazily decode every record in a batch
///
/// Alignment is validated before the iterator is returned, so iteration
/// itself cannot fail.
pub fn records<'a>(
    bytes: &'a [u8],
    schema: &'a Schema,
) -> Result<impl ExactSizeIterator<Item = Record> + 'a, DecodeError> {
    let count = record_count(bytes, schema)?;
    let stride = schema.total_width();
    Ok((0..count).map(move |i| {
        let mut chunk = &bytes[i * stride..(i + 1) * stride];
        read_record(&mut chunk, schema)
    }))
}

pub fn decode_batch(bytes: &[u8], schema: &Schema) -> Result<Vec<Record>, DecodeError> {
    let decoded: Vec<Record> = records(bytes, schema)?.collect();
    trace!(records = decoded.len(), bytes = bytes.len(), "decoded batch");
    Ok(decoded)
}
