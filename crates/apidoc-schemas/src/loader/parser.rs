//! Document parsing for JSON and YAML sources
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::swagger::Api;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Supported source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::unsupported_format(path.to_path_buf())),
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

/// Parser turning raw document bytes into an [`Api`]
#[derive(Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a document file
    ///
    /// A `.yaml`/`.yml` extension parses as YAML directly; anything else goes
    /// through JSON-then-YAML detection.
    pub fn parse_file(&self, path: &Path) -> LoaderResult<Api> {
        let content =
            std::fs::read(path).map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

        let value = match Format::from_path(path) {
            Ok(Format::Yaml) => self.parse_yaml(&content, path)?,
            _ => self.parse_with_fallback(&content, path)?.0,
        };
        self.into_api(value, path)
    }

    /// Parse document bytes of unknown format
    pub fn parse_bytes(&self, content: &[u8], origin: &Path) -> LoaderResult<Api> {
        let (value, format) = self.parse_with_fallback(content, origin)?;
        debug!(origin = %origin.display(), ?format, "Parsed document");
        self.into_api(value, origin)
    }

    /// Parse content as JSON, falling back to YAML
    pub fn parse_with_fallback(&self, content: &[u8], origin: &Path) -> LoaderResult<(Value, Format)> {
        match serde_json::from_slice::<Value>(content) {
            Ok(value) => Ok((value, Format::Json)),
            Err(json_err) => {
                debug!(error = %json_err, "JSON check failed, trying YAML");
                let yaml_value: serde_yaml::Value = serde_yaml::from_slice(content).map_err(|e| {
                    LoaderError::yaml_parse_error(origin.to_path_buf(), &json_err, e)
                })?;
                let value = serde_json::to_value(yaml_value)
                    .map_err(|e| LoaderError::document_error(origin.to_path_buf(), e))?;
                Ok((value, Format::Yaml))
            }
        }
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &[u8], origin: &Path) -> LoaderResult<Value> {
        serde_json::from_slice(content)
            .map_err(|e| LoaderError::json_parse_error(origin.to_path_buf(), e))
    }

    /// Parse YAML content into a JSON value for uniform handling
    pub fn parse_yaml(&self, content: &[u8], origin: &Path) -> LoaderResult<Value> {
        let yaml_value: serde_yaml::Value = serde_yaml::from_slice(content)
            .map_err(|e| LoaderError::explicit_yaml_error(origin.to_path_buf(), e))?;

        serde_json::to_value(yaml_value)
            .map_err(|e| LoaderError::document_error(origin.to_path_buf(), e))
    }

    /// Map a decoded value onto the document model
    pub fn into_api(&self, value: Value, origin: &Path) -> LoaderResult<Api> {
        serde_json::from_value(value)
            .map_err(|e| LoaderError::document_error(origin.to_path_buf(), e))
    }
}
