//! Fieldspec Core - data contract for schema-driven record validation
//!
//! This crate holds the types shared by the validation and conversion engines:
//!
//! - **Values**: [`Value`] trees of scalars, mappings and sequences
//! - **Type tags**: the closed set of expected types and their membership tests
//! - **Errors**: the field error tree and the crate-level [`Error`] enum
//!
//! # Example
//!
//! ```
//! use fieldspec_core::{TypeTag, Value};
//!
//! let value = Value::from("foo");
//! assert!(TypeTag::Str.accepts(&value));
//! assert!(!TypeTag::Int.accepts(&value));
//! ```

pub mod error;
pub mod types;
pub mod value;

// Re-export main types for convenience
pub use error::{
    ConversionError, Error, ErrorCollector, ErrorDescr, ErrorMap, FieldKey, Result,
    ValidationError,
};
pub use types::{CustomType, TypeTag};
pub use value::{Record, Value};
