//! Unit tests for the conversion engine

use chrono::DateTime;
use fieldspec_core::{Error, ErrorDescr, Record, TypeTag, Value};
use fieldspec_schemas::{convert, Converter, FieldConverter, FieldDef, Schema};
use serde_json::json;

fn data(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Converts integer epoch seconds into RFC 3339 text
struct TimestampConverter;

impl FieldConverter for TimestampConverter {
    fn convert_field(
        &self,
        _def: &FieldDef,
        _data: &Record,
        value: &Value,
    ) -> fieldspec_core::Result<Value> {
        let seconds = value
            .as_i64()
            .ok_or_else(|| Error::conversion("timestamp must be an integer"))?;
        let timestamp = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| Error::conversion("year is out of range"))?;
        Ok(Value::from(timestamp.to_rfc3339()))
    }
}

#[cfg(test)]
mod default_conversion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_untyped_field_passes_through() {
        let schema = Schema::new().field("anything", FieldDef::untyped());
        let value = data(json!({"anything": {"nested": [1, 2]}}));
        let converted = convert(&schema, &value, false).unwrap();
        assert_eq!(converted.get("anything"), value.get("anything"));
    }

    #[test]
    fn test_absent_optional_list_is_omitted() {
        let element = Schema::new().field("x", TypeTag::Int);
        let schema = Schema::new().field("l", FieldDef::list_of(element).optional());
        let converted = convert(&schema, &data(json!({})), false).unwrap();
        assert!(converted.is_empty());
    }

    #[test]
    fn test_output_is_a_fresh_record() {
        let schema = Schema::new()
            .field("a", TypeTag::Int)
            .field("b", TypeTag::Str);
        let value = data(json!({"a": 1, "b": "x"}));
        let converted = convert(&schema, &value, false).unwrap();
        assert_eq!(Value::Map(converted), value);
    }

    #[test]
    fn test_nested_records_are_rebuilt() {
        let schema = Schema::new().field(
            "owner",
            FieldDef::dict(
                Schema::new()
                    .field("id", FieldDef::new(TypeTag::Int).required())
                    .field("nick", TypeTag::Str),
            ),
        );
        let converted = convert(&schema, &data(json!({"owner": {"id": 7}})), false).unwrap();
        assert_eq!(Value::Map(converted), data(json!({"owner": {"id": 7}})));
    }
}

#[cfg(test)]
mod custom_converters {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::new().field(
            "timestamp",
            FieldDef::new(TypeTag::Int).with_converter(TimestampConverter),
        )
    }

    #[test]
    fn test_converter_output_replaces_value() {
        let converted = convert(&schema(), &data(json!({"timestamp": 0})), false).unwrap();
        assert_eq!(
            converted.get("timestamp"),
            Some(&Value::from("1970-01-01T00:00:00+00:00"))
        );
    }

    #[test]
    fn test_converter_failure_is_reported_by_field() {
        let error = convert(&schema(), &data(json!({"timestamp": i64::MAX})), false).unwrap_err();
        let error = error.as_conversion().unwrap();
        assert_eq!(
            serde_json::to_value(error).unwrap(),
            json!({"timestamp": "year is out of range"})
        );
    }

    #[test]
    fn test_converter_receives_whole_record() {
        let schema = Schema::new()
            .field("first", TypeTag::Str)
            .field(
                "full",
                FieldDef::new(TypeTag::Str).converter_fn(|_, data, value| {
                    let first = data.get("first").and_then(Value::as_str).unwrap_or_default();
                    let last = value.as_str().unwrap_or_default();
                    Ok(Value::from(format!("{} {}", first, last)))
                }),
            );
        let converted =
            convert(&schema, &data(json!({"first": "Ada", "full": "Lovelace"})), false).unwrap();
        assert_eq!(converted.get("full"), Some(&Value::from("Ada Lovelace")));
        assert_eq!(converted.get("first"), Some(&Value::from("Ada")));
    }

    #[test]
    fn test_nested_converter_failures_are_nested() {
        let element = Schema::new().field(
            "timestamp",
            FieldDef::new(TypeTag::Int).with_converter(TimestampConverter),
        );
        let schema = Schema::new().field("events", FieldDef::list_of(element));
        let value = data(json!({"events": [{"timestamp": 0}, {"timestamp": i64::MAX}]}));

        let error = convert(&schema, &value, false).unwrap_err();
        let error = error.as_conversion().unwrap();
        assert_eq!(
            error.field("events").and_then(|e| e.at(1usize)).and_then(|e| e.at("timestamp")),
            Some(&ErrorDescr::from("year is out of range"))
        );
    }

    #[test]
    fn test_validation_error_from_converter_is_fatal() {
        let schema = Schema::new()
            .field(
                "a",
                FieldDef::untyped().converter_fn(|_, _, _| Err(Error::invalid("wrong pass"))),
            )
            .field(
                "b",
                FieldDef::untyped().converter_fn(|_, _, _| Err(Error::conversion("recorded"))),
            );
        let error = convert(&schema, &data(json!({"a": 1, "b": 2})), false).unwrap_err();
        assert!(error.as_validation().is_some());
    }
}

#[cfg(test)]
mod validation_interplay {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_runs_first() {
        let schema = Schema::new().field(
            "timestamp",
            FieldDef::new(TypeTag::Int).with_converter(TimestampConverter),
        );
        let error = convert(&schema, &data(json!({"timestamp": "soon"})), false).unwrap_err();
        assert_eq!(
            error.as_validation().and_then(|e| e.field("timestamp").cloned()),
            Some(ErrorDescr::from("Field must be a int instance, got: str."))
        );
    }

    #[test]
    fn test_prevalidated_required_field_is_not_rechecked() {
        let schema = Schema::new().field("id", FieldDef::new(TypeTag::Int).required());
        let converted = Converter::new(&schema)
            .validated(true)
            .convert(&data(json!({})))
            .unwrap();
        assert_eq!(converted.get("id"), Some(&Value::Null));
        assert!(Converter::new(&schema).convert(&data(json!({}))).is_err());
    }

    #[test]
    fn test_prevalidated_outer_record_still_validates_nested_records() {
        let schema = Schema::new().field(
            "d",
            FieldDef::dict(Schema::new().field("y", TypeTag::Int)),
        );
        let value = data(json!({"d": {"y": "not-int", "rogue": 1}}));

        let error = convert(&schema, &value, true).unwrap_err();
        assert_eq!(
            serde_json::to_value(error.as_validation().unwrap()).unwrap(),
            json!({
                "rogue": "Rogue field.",
                "y": "Field must be a int instance, got: str."
            })
        );
    }

    #[test]
    fn test_custom_dict_validator_does_not_hide_nested_errors() {
        let schema = Schema::new().field(
            "d",
            FieldDef::dict(Schema::new().field("y", FieldDef::new(TypeTag::Int).required()))
                .validator_fn(|_, _, _, _, _| Ok(())),
        );
        let value = data(json!({"d": {"y": "x", "z": 2}}));

        assert!(fieldspec_schemas::validate(&schema, &value, None).is_ok());
        let error = convert(&schema, &value, false).unwrap_err();
        let error = error.as_validation().unwrap();
        assert_eq!(error.field("z"), Some(&ErrorDescr::from("Rogue field.")));
        assert_eq!(
            error.field("y"),
            Some(&ErrorDescr::from("Field must be a int instance, got: str."))
        );
    }

    #[test]
    fn test_compound_list_elements_are_not_converted() {
        // The default converter only rebuilds list elements through a nested
        // schema; a compound-typed list passes through untouched.
        let schema = Schema::new().field(
            "stamps",
            FieldDef::list_of_type(TypeTag::Int).with_schema(
                Schema::new().field("x", FieldDef::untyped().with_converter(TimestampConverter)),
            ),
        );
        let value = data(json!({"stamps": [0, 1]}));
        let converted = convert(&schema, &value, false).unwrap();
        assert_eq!(converted.get("stamps"), value.get("stamps"));
    }

    #[test]
    fn test_conversion_is_not_idempotent() {
        let schema = Schema::new().field(
            "timestamp",
            FieldDef::new(TypeTag::Int).with_converter(TimestampConverter),
        );
        let once = convert(&schema, &data(json!({"timestamp": 0})), false).unwrap();
        let error = convert(&schema, &Value::Map(once), false).unwrap_err();
        assert!(error.as_validation().is_some());
    }
}
