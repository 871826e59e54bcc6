//! Field type tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    SignedInt,
    UnsignedInt,
    Float,
    Bytes,
}

impl FieldType {
    /// Whether a field of this type may be `width` bytes wide
    pub fn supports_width(self, width: usize) -> bool {
        match self {
            FieldType::SignedInt | FieldType::UnsignedInt => (1..=8).contains(&width),
            FieldType::Float => width == 4 || width == 8,
            FieldType::Bytes => width > 0,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::SignedInt => "signed integer",
            FieldType::UnsignedInt => "unsigned integer",
            FieldType::Float => "float",
            FieldType::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths() {
        for width in 1..=8 {
            assert!(FieldType::SignedInt.supports_width(width));
            assert!(FieldType::UnsignedInt.supports_width(width));
        }
        assert!(!FieldType::SignedInt.supports_width(0));
        assert!(!FieldType::UnsignedInt.supports_width(9));
    }

    #[test]
    fn test_float_widths() {
        assert!(FieldType::Float.supports_width(4));
        assert!(FieldType::Float.supports_width(8));
        assert!(!FieldType::Float.supports_width(2));
        assert!(!FieldType::Float.supports_width(16));
    }

    #[test]
    fn test_bytes_any_positive_width() {
        assert!(FieldType::Bytes.supports_width(1));
        assert!(FieldType::Bytes.supports_width(4096));
        assert!(!FieldType::Bytes.supports_width(0));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FieldType::UnsignedInt).unwrap();
        assert_eq!(json, "\"unsigned_int\"");
        let ty: FieldType = serde_json::from_str("\"signed_int\"").unwrap();
        assert_eq!(ty, FieldType::SignedInt);
    }
}
