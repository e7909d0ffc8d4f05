//! Validation engine
//!
//! Walks a [`Schema`] against a data record and collects every field-level
//! failure in one pass:
//!
//! - data keys with no schema entry are reported as rogue fields
//! - required schema keys with no data entry are reported as missing
//! - every present field is handed to its resolved validator, either the
//!   field's custom hook or [`DefaultValidator`]
//!
//! The call either returns the data untouched or fails with the complete
//! error map. Only [`Error::Validation`] returned by a field validator is
//! recorded against the field; every other error aborts the call.
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

mod default;

pub use default::DefaultValidator;

use crate::hooks::Context;
use crate::schema::Schema;
use fieldspec_core::error::{MISSING_FIELD, ROGUE_FIELD};
use fieldspec_core::{Error, ErrorCollector, Record, Result, ValidationError, Value};
use tracing::{debug, trace};

/// Validates records against one schema
#[derive(Clone, Copy)]
pub struct Validator<'s, 'c> {
    schema: &'s Schema,
    context: Option<&'c Context>,
}

impl<'s, 'c> Validator<'s, 'c> {
    /// Create a validator with no context
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            context: None,
        }
    }

    /// Hand `context` to every custom validator, at every nesting level
    pub fn with_context(mut self, context: &'c Context) -> Self {
        self.context = Some(context);
        self
    }

    pub(crate) fn with_optional_context(mut self, context: Option<&'c Context>) -> Self {
        self.context = context;
        self
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Validate `data`, which must be a mapping, returning it unchanged
    pub fn validate<'d>(&self, data: &'d Value) -> Result<&'d Value> {
        let record = data
            .as_map()
            .ok_or_else(|| Error::input_type("data", data.type_name()))?;
        self.validate_record(record)?;
        Ok(data)
    }

    /// Validate an already-unwrapped record
    pub fn validate_record(&self, data: &Record) -> Result<()> {
        debug!(
            schema_fields = self.schema.len(),
            data_fields = data.len(),
            "validating record"
        );

        let mut errors = ErrorCollector::new();

        for name in data.keys().filter(|name| !self.schema.contains(name)) {
            trace!(field = %name, "rogue field");
            errors.add(name.as_str(), ROGUE_FIELD);
        }

        for (name, def) in self.schema {
            let Some(value) = data.get(name) else {
                if def.required {
                    trace!(field = %name, "missing required field");
                    errors.add(name.as_str(), MISSING_FIELD);
                }
                continue;
            };

            trace!(field = %name, custom = def.validator.is_some(), "validating field");
            match def
                .resolve_validator()
                .validate_field(name, def, data, value, self.context)
            {
                Ok(()) => {}
                Err(Error::Validation(error)) => errors.add(name.as_str(), error.into_errors()),
                Err(other) => return Err(other),
            }
        }

        debug!(failed_fields = errors.len(), "record validated");
        errors
            .into_result()
            .map_err(|map| ValidationError::from(map).into())
    }
}

/// Validate `data` against `schema`.
///
/// Returns `data` itself when every field passes. Fails with
/// [`Error::InputType`] when `data` is not a mapping, and with
/// [`Error::Validation`] carrying every failing field otherwise.
///
/// # Examples
///
/// ```
/// use fieldspec_schemas::{validate, FieldDef, Schema};
/// use fieldspec_core::{TypeTag, Value};
/// use serde_json::json;
///
/// let schema = Schema::new().field("n", FieldDef::new(TypeTag::Int).required());
/// let data = Value::from(json!({"n": "foo"}));
///
/// let error = validate(&schema, &data, None).unwrap_err();
/// assert_eq!(
///     error.as_validation().unwrap().field("n").unwrap().message(),
///     Some("Field must be a int instance, got: str.")
/// );
/// ```
pub fn validate<'d>(
    schema: &Schema,
    data: &'d Value,
    context: Option<&Context>,
) -> Result<&'d Value> {
    Validator::new(schema)
        .with_optional_context(context)
        .validate(data)
}
