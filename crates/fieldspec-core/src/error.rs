//! Error types for validation and conversion
//!
//! Field-level failures are collected into an [`ErrorMap`] keyed by field name
//! or sequence index. A failing field carries either a message or, when the
//! failure happened below it, a nested map. The map is wrapped in a
//! [`ValidationError`] or a [`ConversionError`] depending on which pass
//! produced it.
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Message for a data key that has no schema entry
pub const ROGUE_FIELD: &str = "Rogue field.";
/// Message for a required schema key that has no data entry
pub const MISSING_FIELD: &str = "Missing required field.";
/// Message for a container field that has nothing to recurse into
pub const MISSING_SCHEMA: &str = "Missing schema definition.";

/// Key of an error entry: a field name, or an index into a sequence
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name(String),
    Index(usize),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name(name) => f.write_str(name),
            FieldKey::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        FieldKey::Name(name.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        FieldKey::Name(name)
    }
}

impl From<usize> for FieldKey {
    fn from(index: usize) -> Self {
        FieldKey::Index(index)
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Failing fields, keyed by name or index
pub type ErrorMap = BTreeMap<FieldKey, ErrorDescr>;

/// Description of why one field failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDescr {
    /// The field itself failed
    Message(String),
    /// Something below the field failed
    Nested(ErrorMap),
}

impl ErrorDescr {
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDescr::Message(message) => Some(message),
            ErrorDescr::Nested(_) => None,
        }
    }

    pub fn nested(&self) -> Option<&ErrorMap> {
        match self {
            ErrorDescr::Message(_) => None,
            ErrorDescr::Nested(map) => Some(map),
        }
    }

    /// Follow a path of keys down through nested maps
    pub fn at<K: Into<FieldKey>>(&self, key: K) -> Option<&ErrorDescr> {
        self.nested().and_then(|map| map.get(&key.into()))
    }

    /// Total number of failing leaves below (and including) this entry
    pub fn leaf_count(&self) -> usize {
        match self {
            ErrorDescr::Message(_) => 1,
            ErrorDescr::Nested(map) => map.values().map(ErrorDescr::leaf_count).sum(),
        }
    }
}

impl From<&str> for ErrorDescr {
    fn from(message: &str) -> Self {
        ErrorDescr::Message(message.to_string())
    }
}

impl From<String> for ErrorDescr {
    fn from(message: String) -> Self {
        ErrorDescr::Message(message)
    }
}

impl From<ErrorMap> for ErrorDescr {
    fn from(map: ErrorMap) -> Self {
        ErrorDescr::Nested(map)
    }
}

impl fmt::Display for ErrorDescr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDescr::Message(message) => f.write_str(message),
            ErrorDescr::Nested(map) => {
                write!(f, "{{")?;
                for (i, (key, descr)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, descr)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for ErrorDescr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ErrorDescr::Message(message) => serializer.serialize_str(message),
            ErrorDescr::Nested(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, descr) in map {
                    state.serialize_entry(key, descr)?;
                }
                state.end()
            }
        }
    }
}

macro_rules! field_error {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Error)]
        #[error("{errors}")]
        pub struct $name {
            errors: ErrorDescr,
        }

        impl $name {
            /// Single-message failure, as raised by a field hook
            pub fn new<M: Into<String>>(message: M) -> Self {
                Self {
                    errors: ErrorDescr::Message(message.into()),
                }
            }

            /// The failure payload
            pub fn errors(&self) -> &ErrorDescr {
                &self.errors
            }

            pub fn into_errors(self) -> ErrorDescr {
                self.errors
            }

            /// Aggregated field map, when this is not a single-message failure
            pub fn fields(&self) -> Option<&ErrorMap> {
                self.errors.nested()
            }

            /// Error entry for one field of an aggregated failure
            pub fn field<K: Into<FieldKey>>(&self, key: K) -> Option<&ErrorDescr> {
                self.errors.at(key)
            }
        }

        impl From<ErrorMap> for $name {
            fn from(map: ErrorMap) -> Self {
                Self {
                    errors: ErrorDescr::Nested(map),
                }
            }
        }

        impl From<ErrorDescr> for $name {
            fn from(errors: ErrorDescr) -> Self {
                Self { errors }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                self.errors.serialize(serializer)
            }
        }
    };
}

field_error! {
    /// Failure of the validation pass
    ValidationError
}

field_error! {
    /// Failure of the conversion pass
    ConversionError
}

/// Main error type for fieldspec operations
#[derive(Error, Debug)]
pub enum Error {
    /// A top-level argument was not a mapping. Never aggregated.
    #[error("input {name} must be a dictionary instance, got: {actual}.")]
    InputType {
        name: &'static str,
        actual: &'static str,
    },

    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// One or more fields failed conversion
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// A custom hook failed in a way that is not a field failure
    #[error("Hook error: {0}")]
    Hook(#[from] anyhow::Error),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Field-level validation failure with a message
    pub fn invalid<M: Into<String>>(message: M) -> Self {
        Error::Validation(ValidationError::new(message))
    }

    /// Field-level conversion failure with a message
    pub fn conversion<M: Into<String>>(message: M) -> Self {
        Error::Conversion(ConversionError::new(message))
    }

    /// Input that should have been a mapping but was not
    pub fn input_type(name: &'static str, actual: &'static str) -> Self {
        Error::InputType { name, actual }
    }

    /// Fatal failure from inside a hook
    pub fn hook<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Hook(anyhow::Error::new(error))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_conversion(&self) -> Option<&ConversionError> {
        match self {
            Error::Conversion(error) => Some(error),
            _ => None,
        }
    }
}

/// Message for a value whose type does not match the declared tag
pub fn type_mismatch(expected: &str, actual: &str) -> String {
    format!("Field must be a {} instance, got: {}.", expected, actual)
}

/// Message for a null-typed field that holds a value
pub fn not_none(actual: &str) -> String {
    format!("Field must be None, got: {}.", actual)
}

/// Collects field errors during one traversal level
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: ErrorMap,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field, replacing any earlier entry
    pub fn add<K: Into<FieldKey>, D: Into<ErrorDescr>>(&mut self, key: K, descr: D) {
        self.errors.insert(key.into(), descr.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Ok if nothing was recorded, the collected map otherwise
    pub fn into_result(self) -> std::result::Result<(), ErrorMap> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
