//! Building schemas from declarative documents
//!
//! A document is a flat mapping of field names to attribute mappings:
//!
//! ```yaml
//! name:  { type: str, required: true }
//! tags:  { type: list, compound_type: str }
//! owner:
//!   type: dict
//!   schema:
//!     id: { type: int, required: true }
//! ```
//!
//! Recognised attributes are `type`, `required`, `schema` and
//! `compound_type`. A `type` of `null` declares a null-typed field. Hooks
//! have no declarative form and are attached with [`Schema::field_mut`].
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::parser::{read_document, Format};
use crate::schema::{FieldDef, Schema};
use fieldspec_core::TypeTag;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Build a schema from a parsed document
pub fn schema_from_document(document: &Value) -> LoaderResult<Schema> {
    parse_schema(document, "$")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn child(location: &str, segment: &str) -> String {
    format!("{}.{}", location, segment)
}

fn parse_schema(document: &Value, location: &str) -> LoaderResult<Schema> {
    let fields = document.as_object().ok_or_else(|| {
        let name = if location == "$" { "schema" } else { location };
        LoaderError::not_a_mapping(name, json_type_name(document))
    })?;

    fields
        .iter()
        .map(|(name, attributes)| {
            let field_location = child(location, name);
            parse_field(attributes, &field_location).map(|def| (name.clone(), def))
        })
        .collect()
}

fn parse_field(attributes: &Value, location: &str) -> LoaderResult<FieldDef> {
    let attributes: &Map<String, Value> = attributes
        .as_object()
        .ok_or_else(|| LoaderError::not_a_mapping(location, json_type_name(attributes)))?;

    let mut def = FieldDef::untyped();
    for (attribute, value) in attributes {
        match attribute.as_str() {
            "type" => def.kind = Some(parse_type(value, location, attribute)?),
            "compound_type" => def.compound_type = Some(parse_type(value, location, attribute)?),
            "required" => {
                def.required = value.as_bool().ok_or_else(|| {
                    LoaderError::invalid_attribute(location, attribute, "a boolean")
                })?;
            }
            "schema" => def.schema = Some(parse_schema(value, &child(location, "schema"))?),
            "validator" | "converter" => {
                return Err(LoaderError::invalid_attribute(
                    location,
                    attribute,
                    "a hook attached in code, not in the document",
                ));
            }
            _ => return Err(LoaderError::unknown_attribute(location, attribute)),
        }
    }
    Ok(def)
}

fn parse_type(value: &Value, location: &str, attribute: &str) -> LoaderResult<TypeTag> {
    match value {
        Value::Null => Ok(TypeTag::Null),
        Value::String(name) => {
            TypeTag::from_name(name).ok_or_else(|| LoaderError::unknown_type(location, name))
        }
        _ => Err(LoaderError::invalid_attribute(location, attribute, "a type name")),
    }
}

impl Schema {
    /// Build a schema from a parsed JSON or YAML document
    pub fn from_document(document: &Value) -> LoaderResult<Self> {
        schema_from_document(document)
    }

    /// Parse a JSON schema document
    pub fn from_json_str(content: &str) -> LoaderResult<Self> {
        let document = Format::Json.parse(content, "<json>")?;
        schema_from_document(&document)
    }

    /// Parse a YAML schema document
    pub fn from_yaml_str(content: &str) -> LoaderResult<Self> {
        let document = Format::Yaml.parse(content, "<yaml>")?;
        schema_from_document(&document)
    }

    /// Load a schema file, detecting the format from its extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> LoaderResult<Self> {
        let path = path.as_ref();
        let document = read_document(path)?;
        let schema = schema_from_document(&document)?;
        debug!(path = %path.display(), fields = schema.len(), "loaded schema");
        Ok(schema)
    }
}
