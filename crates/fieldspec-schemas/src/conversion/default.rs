//! Default per-field conversion: pass scalars through, rebuild containers

use crate::conversion::Converter;
use crate::hooks::FieldConverter;
use crate::schema::{FieldDef, Schema};
use fieldspec_core::error::{type_mismatch, MISSING_SCHEMA};
use fieldspec_core::{
    ConversionError, Error, ErrorCollector, Record, Result, TypeTag, Value,
};

/// Converter used for every field without a custom hook.
///
/// The effective type is the field's compound type when one is set, its
/// declared type otherwise. `Dict` values are rebuilt through the nested
/// schema and `List` elements are each rebuilt through the nested schema.
/// Everything else, including fields with no type at all, is returned as-is.
///
/// Nested records are validated against their schema before they are
/// rebuilt, whatever the outer pass did; a nested validation failure is
/// returned as-is.
///
/// List elements are never converted through the compound type: a
/// compound-typed list resolves to a scalar effective type and passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl FieldConverter for DefaultConverter {
    fn convert_field(&self, def: &FieldDef, _data: &Record, value: &Value) -> Result<Value> {
        let Some(kind) = def.compound_type.as_ref().or(def.kind.as_ref()) else {
            return Ok(value.clone());
        };

        // Null stands in for an absent required field; nothing to rebuild.
        if value.is_null() {
            return Ok(Value::Null);
        }

        match kind {
            TypeTag::Dict => convert_dict(def.schema.as_ref(), value),
            TypeTag::List => convert_list(def.schema.as_ref(), value),
            _ => Ok(value.clone()),
        }
    }
}

fn convert_dict(schema: Option<&Schema>, value: &Value) -> Result<Value> {
    if value.as_map().is_none() {
        return Err(Error::conversion(type_mismatch("dict", value.type_name())));
    }
    let schema = schema.ok_or_else(|| Error::conversion(MISSING_SCHEMA))?;

    Converter::new(schema).convert(value).map(Value::Map)
}

fn convert_list(schema: Option<&Schema>, value: &Value) -> Result<Value> {
    let items = value
        .as_list()
        .ok_or_else(|| Error::conversion(type_mismatch("list", value.type_name())))?;

    let mut converted = Vec::with_capacity(items.len());
    let mut errors = ErrorCollector::new();

    for (index, item) in items.iter().enumerate() {
        let Some(schema) = schema else {
            errors.add(index, MISSING_SCHEMA);
            continue;
        };
        if item.as_map().is_none() {
            errors.add(index, Error::input_type("data", item.type_name()).to_string());
            continue;
        }

        match Converter::new(schema).convert(item) {
            Ok(output) => converted.push(Value::Map(output)),
            Err(Error::Conversion(error)) => errors.add(index, error.into_errors()),
            Err(other) => return Err(other),
        }
    }

    errors.into_result().map_err(ConversionError::from)?;
    Ok(Value::List(converted))
}
