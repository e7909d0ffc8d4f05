//! Per-field configuration

use crate::conversion::DefaultConverter;
use crate::hooks::{Context, FieldConverter, FieldValidator, FnConverter, FnValidator};
use crate::schema::Schema;
use crate::validation::DefaultValidator;
use fieldspec_core::{Record, Result, TypeTag, Value};
use std::fmt;
use std::sync::Arc;

/// Expected shape and behavior of a single field
#[derive(Clone, Default)]
pub struct FieldDef {
    /// Expected type. Fields without one are accepted and passed through
    /// unless a hook says otherwise.
    pub kind: Option<TypeTag>,
    /// Absence from the data is an error
    pub required: bool,
    /// Structure of a `Dict` value, or of each element of a `List` value
    pub schema: Option<Schema>,
    /// Scalar type checked directly against each element of a `List` value
    pub compound_type: Option<TypeTag>,
    pub validator: Option<Arc<dyn FieldValidator>>,
    pub converter: Option<Arc<dyn FieldConverter>>,
}

impl FieldDef {
    /// Field of the given type
    pub fn new(kind: TypeTag) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Field with no declared type
    pub fn untyped() -> Self {
        Self::default()
    }

    /// `Dict` field described by `schema`
    pub fn dict(schema: Schema) -> Self {
        Self::new(TypeTag::Dict).with_schema(schema)
    }

    /// `List` field whose elements are mappings described by `schema`
    pub fn list_of(schema: Schema) -> Self {
        Self::new(TypeTag::List).with_schema(schema)
    }

    /// `List` field whose elements must be of type `element`
    pub fn list_of_type(element: TypeTag) -> Self {
        Self::new(TypeTag::List).with_compound_type(element)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_compound_type(mut self, element: TypeTag) -> Self {
        self.compound_type = Some(element);
        self
    }

    pub fn with_validator<V: FieldValidator + 'static>(mut self, validator: V) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_converter<C: FieldConverter + 'static>(mut self, converter: C) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    /// Attach a closure as the custom validator
    pub fn validator_fn<F>(self, f: F) -> Self
    where
        F: Fn(&str, &FieldDef, &Record, &Value, Option<&Context>) -> Result<()>
            + Send
            + Sync
            + 'static,
    {
        self.with_validator(FnValidator::new(f))
    }

    /// Attach a closure as the custom converter
    pub fn converter_fn<F>(self, f: F) -> Self
    where
        F: Fn(&FieldDef, &Record, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.with_converter(FnConverter::new(f))
    }

    /// The validator the engine dispatches to for this field
    pub fn resolve_validator(&self) -> &dyn FieldValidator {
        match &self.validator {
            Some(validator) => validator.as_ref(),
            None => &DefaultValidator,
        }
    }

    /// The converter the engine dispatches to for this field
    pub fn resolve_converter(&self) -> &dyn FieldConverter {
        match &self.converter {
            Some(converter) => converter.as_ref(),
            None => &DefaultConverter,
        }
    }
}

impl From<TypeTag> for FieldDef {
    fn from(kind: TypeTag) -> Self {
        Self::new(kind)
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("schema", &self.schema)
            .field("compound_type", &self.compound_type)
            .field("validator", &self.validator.as_ref().map(|_| "custom"))
            .field("converter", &self.converter.as_ref().map(|_| "custom"))
            .finish()
    }
}
