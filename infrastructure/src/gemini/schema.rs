//! Conversion from domain response schemas to Gemini's schema dialect
//!
//! Gemini's structured-output schemas use uppercase type tags (OBJECT,
//! STRING, ARRAY) rather than JSON Schema's lowercase ones, so the
//! domain [`ResponseSchema`] is rendered here rather than serialized
//! directly.

use muse_domain::{FieldKind, ResponseSchema, SchemaField};
use serde_json::{json, Map, Value};

/// Render a [`ResponseSchema`] as the value Gemini expects in
/// `generationConfig.responseSchema`.
pub fn to_gemini_schema(schema: &ResponseSchema) -> Value {
    let mut properties = Map::new();
    for field in schema.fields() {
        properties.insert(field.name.clone(), field_value(field));
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": schema.required_names(),
    })
}

fn field_value(field: &SchemaField) -> Value {
    let mut value = Map::new();
    match &field.kind {
        FieldKind::Text => {
            value.insert("type".to_string(), json!("STRING"));
        }
        FieldKind::TextEnum(options) => {
            value.insert("type".to_string(), json!("STRING"));
            value.insert("enum".to_string(), json!(options));
        }
        FieldKind::TextArray => {
            value.insert("type".to_string(), json!("ARRAY"));
            value.insert("items".to_string(), json!({"type": "STRING"}));
        }
    }
    if let Some(description) = &field.description {
        value.insert("description".to_string(), json!(description));
    }
    Value::Object(value)
}
