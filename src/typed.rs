//! Statically described record types
//!
//! A type opts into archival by implementing [`FixedRecord`]: it lists its
//! fields once, in wire order, and converts to and from a [`Record`]. The
//! [`fixed_record!`](crate::fixed_record) macro writes that impl from the
//! struct definition, so the field list cannot drift from the struct.
//!
//! ```
//! use fixrec::{fixed_record, from_bytes, to_bytes};
//!
//! fixed_record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Point {
//!         pub x: i32,
//!         pub y: i32,
//!         pub z: i32,
//!     }
//! }
//!
//! let p = Point { x: 1, y: 2, z: 4 };
//! let bytes = to_bytes(&p).unwrap();
//! assert_eq!(bytes, [1, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0]);
//! assert_eq!(from_bytes::<Point>(&bytes).unwrap(), p);
//! ```

use crate::error::{DecodeError, Result, SchemaError};
use crate::types::{FieldType, FieldValue, Record, Schema};
use crate::{parser, writer};

/// Rust scalar with a fixed wire representation
pub trait Primitive: Copy {
    const FIELD_TYPE: FieldType;
    const WIDTH: usize;

    fn into_value(self) -> FieldValue;

    /// Convert back, failing if the value has the wrong kind or range
    fn from_value(value: &FieldValue) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($field_type:ident, $accessor:ident, $($t:ty),+) => {
        $(
            impl Primitive for $t {
                const FIELD_TYPE: FieldType = FieldType::$field_type;
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn into_value(self) -> FieldValue {
                    FieldValue::from(self)
                }

                fn from_value(value: &FieldValue) -> Option<Self> {
                    value.$accessor().and_then(|v| <$t>::try_from(v).ok())
                }
            }
        )+
    };
}

impl_primitive!(SignedInt, as_int, i8, i16, i32, i64);
impl_primitive!(UnsignedInt, as_uint, u8, u16, u32, u64);

impl Primitive for f32 {
    const FIELD_TYPE: FieldType = FieldType::Float;
    const WIDTH: usize = 4;

    fn into_value(self) -> FieldValue {
        FieldValue::from(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_float().map(|v| v as f32)
    }
}

impl Primitive for f64 {
    const FIELD_TYPE: FieldType = FieldType::Float;
    const WIDTH: usize = 8;

    fn into_value(self) -> FieldValue {
        FieldValue::from(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_float()
    }
}

impl<const N: usize> Primitive for [u8; N] {
    const FIELD_TYPE: FieldType = FieldType::Bytes;
    const WIDTH: usize = N;

    fn into_value(self) -> FieldValue {
        FieldValue::from(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_bytes().and_then(|b| <[u8; N]>::try_from(b).ok())
    }
}

/// A type that describes its own fields for archival
pub trait FixedRecord: Sized {
    /// `(name, type, width)` in wire order
    const FIELDS: &'static [(&'static str, FieldType, usize)];

    /// Validated schema built from [`FixedRecord::FIELDS`]
    fn schema() -> std::result::Result<Schema, SchemaError> {
        Schema::new(Self::FIELDS.iter().copied())
    }

    fn to_record(&self) -> Record;

    fn from_record(record: &Record) -> std::result::Result<Self, DecodeError>;
}

/// Extract a typed field from a record
#[doc(hidden)]
pub fn field_from<T: Primitive>(
    record: &Record,
    name: &str,
) -> std::result::Result<T, DecodeError> {
    record
        .get(name)
        .and_then(T::from_value)
        .ok_or_else(|| DecodeError::FieldMismatch {
            field: name.to_string(),
            expected: T::FIELD_TYPE,
        })
}

/// Encode a typed record with its own schema
pub fn to_bytes<T: FixedRecord>(value: &T) -> Result<Vec<u8>> {
    let schema = T::schema()?;
    Ok(writer::encode(&value.to_record(), &schema)?)
}

/// Decode a typed record with its own schema
pub fn from_bytes<T: FixedRecord>(bytes: &[u8]) -> Result<T> {
    let schema = T::schema()?;
    let record = parser::decode(bytes, &schema)?;
    Ok(T::from_record(&record)?)
}

/// Declare a struct of [`Primitive`] fields and implement [`FixedRecord`]
/// for it. Fields are archived in declaration order.
#[macro_export]
macro_rules! fixed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::FixedRecord for $name {
            const FIELDS: &'static [(&'static str, $crate::FieldType, usize)] = &[
                $((
                    stringify!($field),
                    <$fty as $crate::Primitive>::FIELD_TYPE,
                    <$fty as $crate::Primitive>::WIDTH,
                )),*
            ];

            #[allow(unused_mut)]
            fn to_record(&self) -> $crate::Record {
                let mut record = $crate::Record::new();
                $(
                    record.insert(
                        stringify!($field),
                        $crate::Primitive::into_value(self.$field),
                    );
                )*
                record
            }

            #[allow(unused_variables)]
            fn from_record(
                record: &$crate::Record,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                Ok(Self {
                    $($field: $crate::typed::field_from::<$fty>(record, stringify!($field))?,)*
                })
            }
        }
    };
}
