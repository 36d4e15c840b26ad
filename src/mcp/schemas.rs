//! JSON schema builders for MCP tools.

use crate::config::get_config;
use serde_json::{Map, Value};

/// Build the schema describing the `search_memories` tool input.
pub(crate) fn search_input_schema() -> Map<String, Value> {
    let default_limit = get_config().search_default_limit;

    let mut properties = Map::new();
    properties.insert(
        "query".into(),
        string_schema("The search query to find relevant memories"),
    );

    let mut limit_schema = Map::new();
    limit_schema.insert("type".into(), Value::String("integer".into()));
    limit_schema.insert(
        "description".into(),
        Value::String("Maximum number of results to return".into()),
    );
    limit_schema.insert("minimum".into(), Value::Number(1.into()));
    limit_schema.insert(
        "default".into(),
        Value::Number(serde_json::Number::from(default_limit as u64)),
    );
    properties.insert("limit".into(), Value::Object(limit_schema));

    finalize_object_schema(properties, &["query"])
}

/// Build the schema describing the `add_memory` tool input.
pub(crate) fn add_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        "content".into(),
        string_schema("The content to store as a memory"),
    );
    properties.insert(
        "title".into(),
        string_schema("Optional title for the memory"),
    );

    let mut metadata_schema = Map::new();
    metadata_schema.insert("type".into(), Value::String("object".into()));
    metadata_schema.insert(
        "description".into(),
        Value::String("Optional metadata for the memory (key-value pairs)".into()),
    );
    properties.insert("metadata".into(), Value::Object(metadata_schema));

    finalize_object_schema(properties, &["content"])
}

fn string_schema(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert("description".into(), Value::String(description.into()));
    Value::Object(schema)
}

fn finalize_object_schema(properties: Map<String, Value>, required: &[&str]) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".into(),
            Value::Array(
                required
                    .iter()
                    .map(|&key| Value::String(key.into()))
                    .collect(),
            ),
        );
    }
    schema.insert("additionalProperties".into(), Value::Bool(false));
    schema
}
