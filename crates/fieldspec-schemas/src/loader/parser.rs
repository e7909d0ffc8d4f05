//! Reading schema documents from YAML and JSON text
//!
//! Copyright (c) 2025 Fieldspec Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::path::Path;

/// Syntax a schema document is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl Format {
    /// Pick the format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse `content` into an untyped document tree.
    ///
    /// `origin` names where the text came from and only shows up in errors.
    /// YAML goes through `serde_yaml::Value` so both formats end up as the
    /// same JSON tree.
    pub fn parse(self, content: &str, origin: &str) -> LoaderResult<Value> {
        match self {
            Format::Yaml => serde_yaml::from_str::<Value>(content).map_err(|source| {
                LoaderError::Yaml {
                    origin: origin.to_string(),
                    source,
                }
            }),
            Format::Json => serde_json::from_str(content).map_err(|source| LoaderError::Json {
                origin: origin.to_string(),
                source,
            }),
        }
    }
}

/// Read and parse a schema file
pub fn read_document(path: &Path) -> LoaderResult<Value> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("a.toml")).is_err());
        assert!(Format::from_path(Path::new("schema")).is_err());
    }

    #[test]
    fn test_yaml_and_json_agree() {
        let yaml = Format::Yaml
            .parse("name: { type: str, required: true }", "<yaml>")
            .unwrap();
        let json = Format::Json
            .parse(r#"{"name": {"type": "str", "required": true}}"#, "<json>")
            .unwrap();
        assert_eq!(yaml, json);
    }

    #[test]
    fn test_read_document() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"age": {{"type": "int"}}}}"#).unwrap();

        let value = read_document(file.path()).unwrap();
        assert_eq!(value["age"]["type"], "int");
    }

    #[test]
    fn test_errors_name_their_origin() {
        let error = Format::Json.parse("{not json", "inline").unwrap_err();
        assert!(matches!(error, LoaderError::Json { ref origin, .. } if origin == "inline"));
        assert!(error.to_string().starts_with("inline: "));

        let error = Format::Yaml.parse("a: [1", "inline").unwrap_err();
        assert!(matches!(error, LoaderError::Yaml { .. }));

        let error = read_document(Path::new("/nonexistent/schema.yaml")).unwrap_err();
        assert!(matches!(error, LoaderError::Read { .. }));
    }
}
