//! Default per-field validation: type check, then recurse into containers

use crate::hooks::{Context, FieldValidator};
use crate::schema::FieldDef;
use crate::validation::Validator;
use fieldspec_core::error::{not_none, type_mismatch, MISSING_SCHEMA};
use fieldspec_core::{Error, ErrorCollector, Record, Result, TypeTag, ValidationError, Value};
use tracing::trace;

/// Validator used for every field without a custom hook
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidator;

impl FieldValidator for DefaultValidator {
    fn validate_field(
        &self,
        name: &str,
        def: &FieldDef,
        data: &Record,
        value: &Value,
        context: Option<&Context>,
    ) -> Result<()> {
        let Some(kind) = &def.kind else {
            return Ok(());
        };

        check_type(kind, value)?;

        match kind {
            TypeTag::Dict => validate_dict(def, value, context),
            TypeTag::List => validate_list(name, def, data, value, context),
            _ => Ok(()),
        }
    }
}

fn check_type(kind: &TypeTag, value: &Value) -> Result<()> {
    if kind.accepts(value) {
        return Ok(());
    }

    let message = match kind {
        TypeTag::Null => not_none(value.type_name()),
        _ => type_mismatch(kind.name(), value.type_name()),
    };
    Err(Error::invalid(message))
}

fn validate_dict(def: &FieldDef, value: &Value, context: Option<&Context>) -> Result<()> {
    let schema = def
        .schema
        .as_ref()
        .ok_or_else(|| Error::invalid(MISSING_SCHEMA))?;
    let Some(record) = value.as_map() else {
        return Ok(());
    };

    Validator::new(schema)
        .with_optional_context(context)
        .validate_record(record)
}

fn validate_list(
    name: &str,
    def: &FieldDef,
    data: &Record,
    value: &Value,
    context: Option<&Context>,
) -> Result<()> {
    let Some(items) = value.as_list() else {
        return Ok(());
    };

    let mut errors = ErrorCollector::new();
    for (index, item) in items.iter().enumerate() {
        trace!(field = %name, index, "validating element");

        let outcome = if let Some(element) = &def.compound_type {
            let element_def = FieldDef::new(element.clone());
            DefaultValidator.validate_field(name, &element_def, data, item, context)
        } else if let Some(schema) = &def.schema {
            match item.as_map() {
                Some(record) => Validator::new(schema)
                    .with_optional_context(context)
                    .validate_record(record),
                // A non-mapping element is a failure of that element only.
                None => {
                    let message = Error::input_type("data", item.type_name()).to_string();
                    Err(Error::invalid(message))
                }
            }
        } else {
            Err(Error::invalid(MISSING_SCHEMA))
        };

        match outcome {
            Ok(()) => {}
            Err(Error::Validation(error)) => errors.add(index, error.into_errors()),
            Err(other) => return Err(other),
        }
    }

    errors
        .into_result()
        .map_err(|map| ValidationError::from(map).into())
}
