//! Expected-type tags
//!
//! A [`TypeTag`] names the shape a field must have and knows how to test a
//! [`Value`] for membership. Each tag has exactly one membership rule; there is
//! no coercion between tags.

use crate::value::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A caller-defined type: a name plus a membership predicate
#[derive(Clone)]
pub struct CustomType {
    name: Cow<'static, str>,
    predicate: Arc<Predicate>,
}

impl CustomType {
    /// Create a custom type from a name and a membership test
    pub fn new<N, F>(name: N, predicate: F) -> Self
    where
        N: Into<Cow<'static, str>>,
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepts(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for CustomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomType").field("name", &self.name).finish()
    }
}

// Two custom types are the same type when they share a name.
impl PartialEq for CustomType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Expected type of a field
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    /// Unicode text
    Str,
    /// Raw byte string
    Bytes,
    /// Either text or bytes
    AnyStr,
    Int,
    WideInt,
    Float,
    Bool,
    /// Nested mapping, described by a nested schema
    Dict,
    /// Sequence, described by a nested schema or a compound type
    List,
    /// The value must be exactly the "none" value
    Null,
    Custom(CustomType),
}

impl TypeTag {
    /// Declared name, as it appears in error messages
    pub fn name(&self) -> &str {
        match self {
            TypeTag::Str => "str",
            TypeTag::Bytes => "bytes",
            TypeTag::AnyStr => "basestring",
            TypeTag::Int => "int",
            TypeTag::WideInt => "long",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::Dict => "dict",
            TypeTag::List => "list",
            TypeTag::Null => "NoneType",
            TypeTag::Custom(custom) => custom.name(),
        }
    }

    /// Membership test for this tag.
    ///
    /// `Bool` values never satisfy `Int`, and plain `Int` values never
    /// satisfy `WideInt`.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (TypeTag::Str, Value::Str(_)) => true,
            (TypeTag::Bytes, Value::Bytes(_)) => true,
            (TypeTag::AnyStr, Value::Str(_) | Value::Bytes(_)) => true,
            (TypeTag::Int, Value::Int(_)) => true,
            (TypeTag::WideInt, Value::WideInt(_)) => true,
            (TypeTag::Float, Value::Float(_)) => true,
            (TypeTag::Bool, Value::Bool(_)) => true,
            (TypeTag::Dict, Value::Map(_)) => true,
            (TypeTag::List, Value::List(_)) => true,
            (TypeTag::Null, Value::Null) => true,
            (TypeTag::Custom(custom), value) => custom.accepts(value),
            _ => false,
        }
    }

    /// Parse a declarative tag name. Custom tags have no declarative form.
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "str" | "string" | "unicode" => TypeTag::Str,
            "bytes" => TypeTag::Bytes,
            "basestring" | "anystr" => TypeTag::AnyStr,
            "int" | "integer" => TypeTag::Int,
            "long" => TypeTag::WideInt,
            "float" => TypeTag::Float,
            "bool" | "boolean" => TypeTag::Bool,
            "dict" => TypeTag::Dict,
            "list" => TypeTag::List,
            "null" | "none" | "None" | "NoneType" => TypeTag::Null,
            _ => return None,
        };
        Some(tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
