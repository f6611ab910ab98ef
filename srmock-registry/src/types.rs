//! Wire-level schema types.
//!
//! These serialize to the exact JSON shapes registry clients expect, so they
//! double as DTOs for the server crate.

use serde::{Deserialize, Serialize};

/// Serialization format of a schema payload.
///
/// Avro is the protocol default and is omitted from JSON output, matching
/// the upstream wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaType {
    /// Avro (the default; never serialized).
    #[default]
    #[serde(rename = "AVRO")]
    Avro,
    /// Protocol Buffers.
    #[serde(rename = "PROTOBUF")]
    Protobuf,
    /// JSON Schema.
    #[serde(rename = "JSON")]
    Json,
}

impl SchemaType {
    /// True for the Avro default; used to omit `schemaType` on the wire.
    pub fn is_avro(&self) -> bool {
        matches!(self, SchemaType::Avro)
    }
}

/// An opaque schema payload plus its format tag.
///
/// The registry never parses or validates the payload; two schemas are the
/// same schema exactly when their content fingerprints match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Raw schema text.
    pub schema: String,
    /// Serialization format of `schema`.
    #[serde(rename = "schemaType", default, skip_serializing_if = "SchemaType::is_avro")]
    pub schema_type: SchemaType,
}

impl Schema {
    /// Creates an Avro schema from raw text.
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            schema_type: SchemaType::Avro,
        }
    }

    /// Creates a schema with an explicit format tag.
    pub fn with_type(schema: impl Into<String>, schema_type: SchemaType) -> Self {
        Self {
            schema: schema.into(),
            schema_type,
        }
    }
}

/// A schema as registered under a subject.
///
/// Identity is `(subject, version)`; many records across subjects may share
/// one `id` when their content is identical. Serializes with the schema
/// fields flattened into the record object, as the wire protocol requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSchema {
    /// Subject the schema was registered under.
    pub subject: String,
    /// Per-subject version number, starting at 1.
    pub version: i32,
    /// Globally unique id of the schema content.
    pub id: i32,
    /// The schema itself.
    #[serde(flatten)]
    pub schema: Schema,
}
