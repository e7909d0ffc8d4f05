//! Extension points for per-field behavior
//!
//! A field definition may carry a custom validator and a custom converter.
//! When present they replace the default type-check-and-recurse logic for that
//! field. The engines call every hook through the same signature, whether the
//! field is a scalar, a nested mapping or a sequence.
//!
//! A hook reports "this field failed" by returning [`Error::Validation`] (from
//! a validator) or [`Error::Conversion`] (from a converter). Any other error
//! aborts the whole call.
//!
//! [`Error::Validation`]: fieldspec_core::Error::Validation
//! [`Error::Conversion`]: fieldspec_core::Error::Conversion
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

use crate::schema::FieldDef;
use fieldspec_core::{Record, Result, Value};
use std::any::Any;
use std::fmt;

/// Opaque caller-supplied value handed to custom validators
pub type Context = dyn Any + Send + Sync;

/// Replaces the default validation of one field
pub trait FieldValidator: Send + Sync {
    /// Check `value`, the entry for `name` in `data`.
    ///
    /// `context` is whatever the caller passed to the top-level call, or
    /// `None`. Validators that have no use for it ignore it.
    fn validate_field(
        &self,
        name: &str,
        def: &FieldDef,
        data: &Record,
        value: &Value,
        context: Option<&Context>,
    ) -> Result<()>;
}

/// Replaces the default conversion of one field
pub trait FieldConverter: Send + Sync {
    /// Produce the output value for one field. `value` is `Null` when a
    /// required field is absent from `data`.
    fn convert_field(&self, def: &FieldDef, data: &Record, value: &Value) -> Result<Value>;
}

/// Adapts a closure into a [`FieldValidator`]
pub struct FnValidator<F>(F);

impl<F> FnValidator<F>
where
    F: Fn(&str, &FieldDef, &Record, &Value, Option<&Context>) -> Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> FieldValidator for FnValidator<F>
where
    F: Fn(&str, &FieldDef, &Record, &Value, Option<&Context>) -> Result<()> + Send + Sync,
{
    fn validate_field(
        &self,
        name: &str,
        def: &FieldDef,
        data: &Record,
        value: &Value,
        context: Option<&Context>,
    ) -> Result<()> {
        (self.0)(name, def, data, value, context)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnValidator")
    }
}

/// Adapts a closure into a [`FieldConverter`]
pub struct FnConverter<F>(F);

impl<F> FnConverter<F>
where
    F: Fn(&FieldDef, &Record, &Value) -> Result<Value> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> FieldConverter for FnConverter<F>
where
    F: Fn(&FieldDef, &Record, &Value) -> Result<Value> + Send + Sync,
{
    fn convert_field(&self, def: &FieldDef, data: &Record, value: &Value) -> Result<Value> {
        (self.0)(def, data, value)
    }
}

impl<F> fmt::Debug for FnConverter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnConverter")
    }
}
