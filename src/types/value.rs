//! Field values

use std::fmt;

/// Kind of a field value, used when reporting mismatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    UInt,
    Float,
    Bytes,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// Scalar value held by a single record field
///
/// Integers are held at full 64-bit width in memory; the schema decides
/// how many bytes they occupy on the wire. Floats compare by bit pattern,
/// so a NaN equals an identical NaN and `0.0` differs from `-0.0`.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Int(_) => ValueKind::Int,
            FieldValue::UInt(_) => ValueKind::UInt,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Bytes(_) => ValueKind::Bytes,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as u64
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            FieldValue::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as bytes
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::UInt(a), FieldValue::UInt(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a.to_bits() == b.to_bits(),
            (FieldValue::Bytes(a), FieldValue::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_scalar {
    ($variant:ident, $target:ty, $($src:ty),+) => {
        $(
            impl From<$src> for FieldValue {
                fn from(v: $src) -> Self {
                    FieldValue::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

impl_from_scalar!(Int, i64, i8, i16, i32, i64);
impl_from_scalar!(UInt, u64, u8, u16, u32, u64);
impl_from_scalar!(Float, f64, f32, f64);

impl From<Vec<u8>> for FieldValue {
    fn from(v: Vec<u8>) -> Self {
        FieldValue::Bytes(v)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(v: &[u8]) -> Self {
        FieldValue::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for FieldValue {
    fn from(v: [u8; N]) -> Self {
        FieldValue::Bytes(v.to_vec())
    }
}
