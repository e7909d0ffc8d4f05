//! Declarative schema loading
//!
//! Schemas can be written as JSON or YAML documents instead of being built in
//! code. This module parses those documents and turns them into [`Schema`]s.
//!
//! [`Schema`]: crate::schema::Schema
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod error;
pub mod parser;

pub use document::schema_from_document;
pub use error::{LoaderError, LoaderResult};
pub use parser::{read_document, Format};
