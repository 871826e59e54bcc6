//! Schema-bound codec with optional version framing
//!
//! A [`Codec`] pairs a schema with a [`CodecConfig`]. With the default
//! configuration it produces exactly the bare wire format of
//! [`writer::encode`](crate::writer::encode). With a version configured,
//! every buffer starts with one version byte:
//!
//! ```text
//! ┌──────────┬──────────────────────────┐
//! │ Version  │ Fields (schema order)    │
//! │ 1 byte   │ total_width bytes, LE    │
//! └──────────┴──────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fixrec::{Codec, CodecConfig, Record, Schema, FORMAT_VERSION};
//!
//! let schema = Schema::builder().signed("x", 4).build().unwrap();
//! let codec = Codec::with_config(&schema, CodecConfig::new().with_version(FORMAT_VERSION));
//!
//! let bytes = codec.encode(&Record::new().with("x", 7i32)).unwrap();
//! assert_eq!(bytes, [FORMAT_VERSION, 7, 0, 0, 0]);
//! assert_eq!(codec.decode(&bytes).unwrap().get("x").unwrap().as_int(), Some(7));
//! ```

use crate::error::{DecodeError, EncodeError};
use crate::parser::{check_len, read_record};
use crate::types::{Record, Schema, VERSION_PREFIX_SIZE};
use crate::writer::write_record;
use bytes::BufMut;
use tracing::{debug, trace};

/// Codec configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    version: Option<u8>,
}

impl CodecConfig {
    /// Bare format, no prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every buffer with `version` and require it on decode
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    pub fn version(&self) -> Option<u8> {
        self.version
    }

    fn prefix_len(&self) -> usize {
        if self.version.is_some() {
            VERSION_PREFIX_SIZE
        } else {
            0
        }
    }
}

/// Encoder/decoder bound to one schema
///
/// Holds only a shared reference and a copyable config; calls share no
/// state and may run concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'s> {
    schema: &'s Schema,
    config: CodecConfig,
}

impl<'s> Codec<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_config(schema, CodecConfig::default())
    }

    pub fn with_config(schema: &'s Schema, config: CodecConfig) -> Self {
        Self { schema, config }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Length of every buffer this codec produces
    pub fn encoded_len(&self) -> usize {
        self.config.prefix_len() + self.schema.total_width()
    }

    pub fn encode(&self, record: &Record) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        if let Some(version) = self.config.version {
            buf.put_u8(version);
        }
        write_record(&mut buf, record, self.schema)
            .inspect_err(|e| debug!(error = %e, "encode failed"))?;
        trace!(bytes = buf.len(), version = ?self.config.version, "encoded record");
        Ok(buf)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Record, DecodeError> {
        check_len(bytes.len(), self.encoded_len())?;
        let mut cursor = bytes;
        if let Some(expected) = self.config.version {
            let actual = cursor[0];
            if actual != expected {
                debug!(expected, actual, "version mismatch");
                return Err(DecodeError::VersionMismatch { expected, actual });
            }
            cursor = &cursor[VERSION_PREFIX_SIZE..];
        }
        let record = read_record(&mut cursor, self.schema);
        trace!(bytes = bytes.len(), version = ?self.config.version, "decoded record");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FORMAT_VERSION, FieldValue};

    fn xy() -> Schema {
        Schema::builder().signed("x", 2).unsigned("y", 1).build().unwrap()
    }

    fn sample() -> Record {
        Record::new().with("x", -1i16).with("y", 9u8)
    }

    #[test]
    fn test_default_is_bare() {
        let schema = xy();
        let codec = Codec::new(&schema);
        assert_eq!(codec.encoded_len(), 3);
        let bytes = codec.encode(&sample()).unwrap();
        assert_eq!(bytes, crate::writer::encode(&sample(), &schema).unwrap());
        assert_eq!(codec.decode(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_versioned_roundtrip() {
        let schema = xy();
        let codec = Codec::with_config(&schema, CodecConfig::new().with_version(FORMAT_VERSION));
        let bytes = codec.encode(&sample()).unwrap();
        assert_eq!(bytes, [FORMAT_VERSION, 0xFF, 0xFF, 9]);
        assert_eq!(codec.decode(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_version_mismatch() {
        let schema = xy();
        let v1 = Codec::with_config(&schema, CodecConfig::new().with_version(1));
        let v2 = Codec::with_config(&schema, CodecConfig::new().with_version(2));
        let bytes = v1.encode(&sample()).unwrap();
        assert_eq!(
            v2.decode(&bytes),
            Err(DecodeError::VersionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_versioned_length_checked_first() {
        let schema = xy();
        let codec = Codec::with_config(&schema, CodecConfig::new().with_version(7));
        // Wrong version byte and wrong length: length wins
        assert_eq!(
            codec.decode(&[0, 0, 0]),
            Err(DecodeError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(codec.decode(&[]).is_err());
    }

    #[test]
    fn test_versioned_empty_schema() {
        let schema = Schema::empty();
        let codec = Codec::with_config(&schema, CodecConfig::new().with_version(3));
        let bytes = codec.encode(&Record::new()).unwrap();
        assert_eq!(bytes, [3]);
        assert!(codec.decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_encode_failure_is_atomic() {
        let schema = xy();
        let codec = Codec::with_config(&schema, CodecConfig::new().with_version(1));
        let record = Record::new().with("x", 0i16).with("y", FieldValue::UInt(256));
        assert!(matches!(
            codec.encode(&record),
            Err(EncodeError::Overflow { .. })
        ));
    }
}
