//! Fieldspec Schemas - validation and conversion of loosely-typed records
//!
//! This crate checks nested record data against a declarative [`Schema`] and
//! turns validated data into converted output:
//!
//! - **Validation**: every failing field is reported in a single pass, with
//!   nested mappings and sequences reported as nested error maps
//! - **Conversion**: a fresh record is built by running each field through
//!   its converter, recursing into nested mappings and sequences
//! - **Hooks**: custom validators and converters replace the default logic
//!   of individual fields
//! - **Loading**: schemas can be authored as JSON or YAML documents
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldspec_schemas::{convert, validate, FieldDef, Schema};
//! use fieldspec_core::{Error, TypeTag, Value};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("name", FieldDef::new(TypeTag::Str).required())
//!     .field("tags", FieldDef::list_of_type(TypeTag::Str));
//!
//! let data = Value::from(json!({"name": "ada", "tags": ["x", 1]}));
//! match validate(&schema, &data, None) {
//!     Ok(_) => println!("valid"),
//!     Err(Error::Validation(errors)) => println!("invalid: {}", errors),
//!     Err(other) => panic!("{}", other),
//! }
//!
//! let data = Value::from(json!({"name": "ada"}));
//! let converted = convert(&schema, &data, false).unwrap();
//! assert_eq!(converted.len(), 1);
//! ```
//!
//! The engines hold no state between calls and never modify their input, so a
//! schema can be shared freely across threads. Recursion depth follows the
//! nesting depth of the data; no limit is imposed.
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

pub mod conversion;
pub mod hooks;
pub mod loader;
pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use conversion::{convert, Converter, DefaultConverter};
pub use hooks::{Context, FieldConverter, FieldValidator, FnConverter, FnValidator};
pub use loader::{read_document, Format, LoaderError, LoaderResult};
pub use schema::{FieldDef, Schema};
pub use validation::{validate, DefaultValidator, Validator};
