//! Error types for fixrec

use crate::types::{FieldType, ValueKind};
use thiserror::Error;

/// Malformed schema, raised at construction
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Width of zero or below
    #[error("field '{field}' has non-positive width {width}")]
    NonPositiveWidth { field: String, width: i64 },

    /// Width the field type cannot be stored in
    #[error("field '{field}': {field_type} cannot be {width} bytes wide")]
    UnsupportedWidth {
        field: String,
        field_type: FieldType,
        width: usize,
    },

    /// Two fields share a name
    #[error("duplicate field name '{0}'")]
    DuplicateField(String),

    /// Total record width does not fit in usize
    #[error("total record width overflows usize")]
    TooWide,

    /// Schema definition document could not be read or written
    #[error("invalid schema definition: {0}")]
    Definition(#[from] serde_json::Error),
}

/// Record could not be encoded; no buffer is produced
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Schema names a field the record does not supply
    #[error("record is missing field '{0}'")]
    MissingField(String),

    /// Value does not fit in the declared width
    #[error("value for field '{field}' does not fit in a {width}-byte {field_type}")]
    Overflow {
        field: String,
        field_type: FieldType,
        width: usize,
    },

    /// Float would not read back bit-for-bit at the declared width
    #[error("value for field '{field}' is not exactly representable as a {width}-byte float")]
    Inexact { field: String, width: usize },

    /// Value kind does not match the field type
    #[error("field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: ValueKind,
    },

    /// Bytes value length differs from the declared width
    #[error("field '{field}' expects exactly {expected} bytes, got {actual}")]
    BytesLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A record inside a batch failed
    #[error("record {index}: {source}")]
    InRecord {
        index: usize,
        #[source]
        source: Box<EncodeError>,
    },
}

/// Buffer could not be decoded; no record is produced
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer length differs from the schema's total width
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Version prefix differs from the configured version
    #[error("unsupported version: {actual}, expected {expected}")]
    VersionMismatch { expected: u8, actual: u8 },

    /// Batch length is not a whole number of records
    #[error("batch of {len} bytes is not a multiple of the {stride}-byte record stride")]
    Misaligned { len: usize, stride: usize },

    /// Decoded record does not match the typed record's fields
    #[error("record field '{field}' is missing or not a {expected}")]
    FieldMismatch { field: String, expected: FieldType },
}

/// Main error type covering schema construction and both codec directions
#[derive(Debug, Error)]
pub enum FixrecError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type alias using FixrecError.
pub type Result<T> = std::result::Result<T, FixrecError>;

/// Error for extracting a typed column from a batch
#[cfg(feature = "ndarray")]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    /// Schema has no field with this name
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Element type does not match the field
    #[error(
        "field '{field}' is a {width}-byte {field_type}, requested a {requested_width}-byte {requested_type}"
    )]
    TypeMismatch {
        field: String,
        field_type: FieldType,
        width: usize,
        requested_type: FieldType,
        requested_width: usize,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
