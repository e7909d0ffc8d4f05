//! Error types for schema loading operations
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while turning a declarative document into a schema
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("cannot read schema file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{origin}: invalid YAML schema document: {source}")]
    Yaml {
        origin: String,
        source: serde_yaml::Error,
    },

    #[error("{origin}: invalid JSON schema document: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },

    /// A schema file whose extension names no known format
    #[error("'{}': schema files must end in .yaml, .yml or .json", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A schema or field definition that is not a mapping
    #[error("input {location} must be a dictionary instance, got: {actual}.")]
    NotAMapping {
        location: String,
        actual: &'static str,
    },

    /// A `type` or `compound_type` naming no known type
    #[error("Unknown type '{name}' at '{location}'")]
    UnknownType { location: String, name: String },

    /// A field attribute the loader does not recognise
    #[error("Unknown attribute '{attribute}' at '{location}'")]
    UnknownAttribute { location: String, attribute: String },

    /// A known attribute with a value of the wrong shape
    #[error("Invalid attribute '{attribute}' at '{location}': expected {expected}")]
    InvalidAttribute {
        location: String,
        attribute: String,
        expected: &'static str,
    },
}

impl LoaderError {
    pub fn not_a_mapping<L: Into<String>>(location: L, actual: &'static str) -> Self {
        Self::NotAMapping {
            location: location.into(),
            actual,
        }
    }

    pub fn unknown_type<L: Into<String>, N: Into<String>>(location: L, name: N) -> Self {
        Self::UnknownType {
            location: location.into(),
            name: name.into(),
        }
    }

    pub fn unknown_attribute<L: Into<String>, A: Into<String>>(location: L, attribute: A) -> Self {
        Self::UnknownAttribute {
            location: location.into(),
            attribute: attribute.into(),
        }
    }

    pub fn invalid_attribute<L: Into<String>, A: Into<String>>(
        location: L,
        attribute: A,
        expected: &'static str,
    ) -> Self {
        Self::InvalidAttribute {
            location: location.into(),
            attribute: attribute.into(),
            expected,
        }
    }
}
