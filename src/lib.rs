//! fixrec - Fixed-schema binary records
//!
//! A compact, language-agnostic wire format for records whose fields are
//! known ahead of time. The schema is agreed out-of-band; the bytes carry no
//! names, tags or framing.
//!
//! # Format
//!
//! - A record is exactly `sum(field widths)` bytes
//! - Fields appear in schema declaration order, no padding
//! - Multi-byte values are little-endian
//! - Signed integers are two's complement, floats are IEEE-754
//!
//! # Example
//!
//! ```rust
//! use fixrec::{Record, Schema, decode, encode};
//!
//! let schema = Schema::builder()
//!     .signed("x", 4)
//!     .signed("y", 4)
//!     .signed("z", 4)
//!     .build()
//!     .unwrap();
//!
//! let record = Record::new().with("x", 1i32).with("y", 2i32).with("z", 4i32);
//! let bytes = encode(&record, &schema).unwrap();
//! assert_eq!(bytes, [1, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0]);
//!
//! assert_eq!(decode(&bytes, &schema).unwrap(), record);
//! ```

pub mod batch;
pub mod codec;
pub mod error;
pub mod parser;
pub mod typed;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use batch::{decode_batch, encode_batch, record_count, records};
pub use codec::{Codec, CodecConfig};
pub use error::{DecodeError, EncodeError, FixrecError, Result, SchemaError};
pub use parser::decode;
pub use typed::{FixedRecord, Primitive, from_bytes, to_bytes};
pub use types::{
    FORMAT_VERSION, FieldDescriptor, FieldType, FieldValue, Record, Schema, SchemaBuilder,
    VERSION_PREFIX_SIZE, ValueKind,
};
pub use writer::encode;

#[cfg(feature = "ndarray")]
pub use error::ColumnError;
#[cfg(feature = "ndarray")]
pub use ndarray_ext::column;
