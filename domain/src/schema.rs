//! Structured-response schema descriptor
//!
//! Describes the exact shape the oracle is asked to produce for a
//! structured query: field names, kinds, enumerations, and which fields
//! are mandatory. The descriptor is provider-neutral; the infrastructure
//! layer converts it to the wire schema format of the concrete backend.
//!
//! Schema-guided generation is a strong hint, not a verified guarantee:
//! consumers still validate whatever comes back.

use serde::{Deserialize, Serialize};

/// Kind of a single schema field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free-form text.
    Text,
    /// Text restricted to a fixed set of values.
    TextEnum(Vec<String>),
    /// Ordered array of text items.
    TextArray,
}

/// One field of the expected structured answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name exactly as it must appear in the payload.
    pub name: String,
    /// Field kind.
    pub kind: FieldKind,
    /// Guidance for the generator, forwarded verbatim.
    pub description: Option<String>,
    /// Whether the payload must contain this field.
    pub required: bool,
}

impl SchemaField {
    /// Free-form text field
    pub fn text(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            description: None,
            required,
        }
    }

    /// Enumerated text field
    pub fn text_enum<I, S>(name: impl Into<String>, values: I, required: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: FieldKind::TextEnum(values.into_iter().map(Into::into).collect()),
            description: None,
            required,
        }
    }

    /// Array-of-text field
    pub fn text_array(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::TextArray,
            description: None,
            required,
        }
    }

    /// Attach generator guidance (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The full expected shape of a structured answer (an object schema)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSchema {
    fields: Vec<SchemaField>,
}

impl ResponseSchema {
    pub fn object() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field (builder pattern)
    pub fn field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Names of all mandatory fields, in declaration order
    pub fn required_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }
}
