//! Schema descriptors
//!
//! A schema is the ordered list of fields both sides of a buffer agree on.
//! Offsets are never stored: a field's offset is the sum of the widths
//! declared before it.

use super::FieldType;
use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A single field: name, type and width in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    field_type: FieldType,
    width: usize,
}

impl FieldDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// Validated, immutable field layout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
    total_width: usize,
}

/// Schema definition document (load-time schemas)
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDef {
    fields: Vec<FieldDef>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDef {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    width: i64,
}

impl Schema {
    /// Build a schema from `(name, type, width)` tuples in declaration order
    pub fn new<I, N>(fields: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (N, FieldType, usize)>,
        N: Into<String>,
    {
        let defs = fields
            .into_iter()
            .map(|(name, field_type, width)| {
                Ok(FieldDef {
                    name: name.into(),
                    field_type,
                    width: i64::try_from(width).map_err(|_| SchemaError::TooWide)?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()
            .inspect_err(|e| debug!(error = %e, "rejected schema"))?;
        Self::from_defs(defs)
    }

    /// Schema with no fields; encodes every record to zero bytes
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Load a schema from its JSON definition
    ///
    /// ```json
    /// {"fields": [{"name": "x", "type": "signed_int", "width": 4}]}
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let def: SchemaDef = serde_json::from_str(json).inspect_err(|e| {
            debug!(error = %e, "rejected schema definition");
        })?;
        Self::from_defs(def.fields)
    }

    /// Export the schema as a JSON definition accepted by [`Schema::from_json`]
    pub fn to_json(&self) -> Result<String, SchemaError> {
        let def = SchemaDef {
            fields: self
                .fields
                .iter()
                .map(|f| FieldDef {
                    name: f.name.clone(),
                    field_type: f.field_type,
                    width: f.width as i64,
                })
                .collect(),
        };
        Ok(serde_json::to_string(&def)?)
    }

    fn from_defs(defs: Vec<FieldDef>) -> Result<Self, SchemaError> {
        Self::validate(defs).inspect_err(|e| debug!(error = %e, "rejected schema"))
    }

    fn validate(defs: Vec<FieldDef>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(defs.len());
        let mut fields = Vec::with_capacity(defs.len());
        let mut total_width = 0usize;

        for def in defs {
            if def.width <= 0 {
                return Err(SchemaError::NonPositiveWidth {
                    field: def.name,
                    width: def.width,
                });
            }
            let width = usize::try_from(def.width).map_err(|_| SchemaError::TooWide)?;
            if !def.field_type.supports_width(width) {
                return Err(SchemaError::UnsupportedWidth {
                    field: def.name,
                    field_type: def.field_type,
                    width,
                });
            }
            if !seen.insert(def.name.clone()) {
                return Err(SchemaError::DuplicateField(def.name));
            }
            total_width = total_width
                .checked_add(width)
                .ok_or(SchemaError::TooWide)?;
            fields.push(FieldDescriptor {
                name: def.name,
                field_type: def.field_type,
                width,
            });
        }

        Ok(Self {
            fields,
            total_width,
        })
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Size in bytes of one encoded record
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Byte offset of a field within an encoded record
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.layout()
            .find(|(_, f)| f.name == name)
            .map(|(offset, _)| offset)
    }

    /// Fields paired with their byte offsets, in declaration order
    pub fn layout(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.fields.iter().scan(0usize, |offset, field| {
            let start = *offset;
            *offset += field.width;
            Some((start, field))
        })
    }
}

/// Incremental schema construction
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, FieldType, usize)>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType, width: usize) -> Self {
        self.fields.push((name.into(), field_type, width));
        self
    }

    pub fn signed(self, name: impl Into<String>, width: usize) -> Self {
        self.field(name, FieldType::SignedInt, width)
    }

    pub fn unsigned(self, name: impl Into<String>, width: usize) -> Self {
        self.field(name, FieldType::UnsignedInt, width)
    }

    pub fn float(self, name: impl Into<String>, width: usize) -> Self {
        self.field(name, FieldType::Float, width)
    }

    pub fn bytes(self, name: impl Into<String>, width: usize) -> Self {
        self.field(name, FieldType::Bytes, width)
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        Schema::new(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz() -> Schema {
        Schema::builder()
            .signed("x", 4)
            .signed("y", 4)
            .signed("z", 4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_total_width_is_sum() {
        let schema = Schema::builder()
            .signed("a", 1)
            .unsigned("b", 8)
            .float("c", 4)
            .bytes("d", 16)
            .build()
            .unwrap();
        assert_eq!(schema.total_width(), 29);
        assert_eq!(schema.len(), 4);
    }

    #[test]
    fn test_offsets_are_prefix_sums() {
        let schema = xyz();
        let offsets: Vec<_> = schema.layout().map(|(o, f)| (o, f.name())).collect();
        assert_eq!(offsets, vec![(0, "x"), (4, "y"), (8, "z")]);
        assert_eq!(schema.offset_of("z"), Some(8));
        assert_eq!(schema.offset_of("w"), None);
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new(Vec::<(String, FieldType, usize)>::new()).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.total_width(), 0);
        assert_eq!(schema, Schema::empty());
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Schema::builder().bytes("pad", 0).build().unwrap_err();
        assert!(matches!(err, SchemaError::NonPositiveWidth { width: 0, .. }));
    }

    #[test]
    fn test_unsupported_width_rejected() {
        let err = Schema::builder().float("f", 2).build().unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedWidth { width: 2, .. }));

        let err = Schema::builder().signed("i", 16).build().unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedWidth { width: 16, .. }));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_width_beyond_i64_rejected() {
        let err = Schema::builder().bytes("huge", usize::MAX).build().unwrap_err();
        assert!(matches!(err, SchemaError::TooWide));

        let width = i64::MAX as usize + 1;
        let err = Schema::builder().bytes("huge", width).build().unwrap_err();
        assert!(matches!(err, SchemaError::TooWide));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Schema::builder()
            .signed("x", 4)
            .unsigned("x", 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField(name) if name == "x"));
    }

    #[test]
    fn test_from_json() {
        let schema = Schema::from_json(
            r#"{"fields": [
                {"name": "id", "type": "unsigned_int", "width": 8},
                {"name": "score", "type": "float", "width": 4}
            ]}"#,
        )
        .unwrap();
        assert_eq!(schema.total_width(), 12);
        let score = schema.field("score").unwrap();
        assert_eq!(score.field_type(), FieldType::Float);
        assert_eq!(score.width(), 4);
    }

    #[test]
    fn test_from_json_negative_width() {
        let err = Schema::from_json(r#"{"fields": [{"name": "x", "type": "signed_int", "width": -4}]}"#)
            .unwrap_err();
        assert!(matches!(err, SchemaError::NonPositiveWidth { width: -4, .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Schema::from_json(r#"{"fields": [{"name": "x", "type": "decimal", "width": 4}]}"#)
            .unwrap_err();
        assert!(matches!(err, SchemaError::Definition(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let schema = xyz();
        let json = schema.to_json().unwrap();
        assert_eq!(Schema::from_json(&json).unwrap(), schema);
    }

    #[test]
    fn test_schema_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
