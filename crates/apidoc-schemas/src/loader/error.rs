//! Error types for document loading operations
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while reading and decoding a specification document
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The content was not valid JSON and was explicitly requested as JSON
    #[error("Failed to parse JSON document '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The content was neither valid JSON nor valid YAML
    #[error("Failed to parse document '{path}'\njson check failed: {json}\nyaml parse failed: {source}")]
    YamlParseError {
        path: PathBuf,
        json: String,
        source: serde_yaml::Error,
    },

    /// The content parsed but does not have the shape of a Swagger document
    #[error("Document '{path}' is not a valid API description: {source}")]
    DocumentError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },
}

impl From<std::io::Error> for LoaderError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::from("<unknown>"),
            source: error,
        }
    }
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError {
            path,
            source: error,
        }
    }

    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParseError {
            path,
            source: error,
        }
    }

    /// Create a YAML error that keeps the preceding JSON failure
    pub fn yaml_parse_error(path: PathBuf, json: &serde_json::Error, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path,
            json: format!("line: {}, column: {}: {}", json.line(), json.column(), json),
            source: error,
        }
    }

    /// Create a YAML error for a source declared as YAML
    pub fn explicit_yaml_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path,
            json: "skipped, source declared as YAML".to_string(),
            source: error,
        }
    }

    pub fn document_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::DocumentError {
            path,
            source: error,
        }
    }

    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::IoError { path, .. }
            | Self::JsonParseError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::DocumentError { path, .. }
            | Self::UnsupportedFormat { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let path = PathBuf::from("swagger.yaml");

        let io_err = LoaderError::io_error(
            path.clone(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
        );
        assert!(matches!(io_err, LoaderError::IoError { .. }));
        assert_eq!(io_err.path(), &path);
    }

    #[test]
    fn test_yaml_error_keeps_json_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();

        let err = LoaderError::yaml_parse_error(PathBuf::from("doc"), &json_err, yaml_err);
        let message = err.to_string();
        assert!(message.contains("json check failed: line: 2"));
        assert!(message.contains("yaml parse failed"));
    }
}
