//! Core types for fixrec records

mod field_type;
mod header;
mod record;
mod schema;
mod value;

pub use field_type::FieldType;
pub use header::{FORMAT_VERSION, VERSION_PREFIX_SIZE};
pub use record::Record;
pub use schema::{FieldDescriptor, Schema, SchemaBuilder};
pub use value::{FieldValue, ValueKind};
