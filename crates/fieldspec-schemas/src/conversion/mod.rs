//! Conversion engine
//!
//! Builds a new record from validated data by running each schema field
//! through its resolved converter. The input is never modified; the output is
//! always a freshly built record.
//!
//! Conversion is not idempotent in general: a converter may change a value's
//! type, so converted output need not satisfy the schema it came from.
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

mod default;

pub use default::DefaultConverter;

use crate::schema::Schema;
use crate::validation::Validator;
use fieldspec_core::{ConversionError, Error, ErrorCollector, Record, Result, Value};
use tracing::{debug, trace};

// Stand-in value for required fields absent from the data
static NULL: Value = Value::Null;

/// Converts records described by one schema
#[derive(Clone, Copy)]
pub struct Converter<'s> {
    schema: &'s Schema,
    validated: bool,
}

impl<'s> Converter<'s> {
    /// Create a converter that validates its input first
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            validated: false,
        }
    }

    /// Skip the validation pass; the caller vouches for the data
    pub fn validated(mut self, validated: bool) -> Self {
        self.validated = validated;
        self
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Convert `data`, which must be a mapping.
    ///
    /// Unless marked as validated, the data is validated first and a
    /// validation failure is returned as-is, before any converter runs.
    pub fn convert(&self, data: &Value) -> Result<Record> {
        let record = data
            .as_map()
            .ok_or_else(|| Error::input_type("data", data.type_name()))?;

        if !self.validated {
            Validator::new(self.schema).validate_record(record)?;
        }

        self.convert_record(record)
    }

    /// Convert an already-unwrapped record without validating it
    pub fn convert_record(&self, data: &Record) -> Result<Record> {
        debug!(schema_fields = self.schema.len(), "converting record");

        let mut output = Record::new();
        let mut errors = ErrorCollector::new();

        for (name, def) in self.schema {
            let value = match data.get(name) {
                Some(value) => value,
                None if def.required => &NULL,
                None => continue,
            };

            trace!(field = %name, custom = def.converter.is_some(), "converting field");
            match def.resolve_converter().convert_field(def, data, value) {
                Ok(converted) => {
                    output.insert(name.clone(), converted);
                }
                Err(Error::Conversion(error)) => errors.add(name.as_str(), error.into_errors()),
                Err(other) => return Err(other),
            }
        }

        debug!(failed_fields = errors.len(), "record converted");
        errors
            .into_result()
            .map_err(ConversionError::from)?;
        Ok(output)
    }
}

/// Convert `data` according to `schema`.
///
/// When `validated` is false the data is validated first. Fails with
/// [`Error::Validation`] from that pass, or with [`Error::Conversion`]
/// carrying every field whose converter failed.
///
/// # Examples
///
/// ```
/// use fieldspec_schemas::{convert, FieldDef, Schema};
/// use fieldspec_core::{TypeTag, Value};
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field("name", FieldDef::new(TypeTag::Str).required())
///     .field("nick", TypeTag::Str);
/// let data = Value::from(json!({"name": "ada"}));
///
/// let converted = convert(&schema, &data, false).unwrap();
/// assert_eq!(converted.get("name"), Some(&Value::from("ada")));
/// assert!(!converted.contains_key("nick"));
/// ```
pub fn convert(schema: &Schema, data: &Value, validated: bool) -> Result<Record> {
    Converter::new(schema).validated(validated).convert(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;
    use fieldspec_core::{ErrorDescr, TypeTag};
    use serde_json::json;

    #[test]
    fn test_validation_failure_is_returned_unchanged() {
        let schema = Schema::new().field(
            "a",
            FieldDef::new(TypeTag::Int)
                .converter_fn(|_, _, _| panic!("converter must not run on invalid data")),
        );
        let data = Value::from(json!({"a": "x"}));
        let error = convert(&schema, &data, false).unwrap_err();
        assert!(error.as_validation().is_some());
    }

    #[test]
    fn test_non_mapping_data() {
        let schema = Schema::new();
        let error = convert(&schema, &Value::Int(1), true).unwrap_err();
        assert!(matches!(error, Error::InputType { name: "data", actual: "int" }));
    }

    #[test]
    fn test_required_absent_field_converts_to_null_when_prevalidated() {
        let schema = Schema::new().field("a", FieldDef::new(TypeTag::Int).required());
        let data = Value::from(json!({}));
        let converted = convert(&schema, &data, true).unwrap();
        assert_eq!(converted.get("a"), Some(&Value::Null));
    }

    #[test]
    fn test_prevalidated_data_skips_rogue_check() {
        let schema = Schema::new().field("a", TypeTag::Int);
        let data = Value::from(json!({"a": 1, "rogue": 2}));
        let converted = convert(&schema, &data, true).unwrap();
        assert_eq!(converted.len(), 1);
        assert!(convert(&schema, &data, false).is_err());
    }

    #[test]
    fn test_all_converter_failures_collected() {
        let failing = |_: &FieldDef, _: &Record, _: &Value| -> Result<Value> {
            Err(Error::conversion("nope"))
        };
        let schema = Schema::new()
            .field("a", FieldDef::untyped().converter_fn(failing))
            .field("b", FieldDef::untyped().converter_fn(failing))
            .field("c", TypeTag::Int);
        let data = Value::from(json!({"a": 1, "b": 2, "c": 3}));
        let error = convert(&schema, &data, false).unwrap_err();
        let error = error.as_conversion().unwrap();
        assert_eq!(error.fields().map(|f| f.len()), Some(2));
        assert_eq!(error.field("a"), Some(&ErrorDescr::from("nope")));
    }
}
