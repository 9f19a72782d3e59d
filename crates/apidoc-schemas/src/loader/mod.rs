//! Document loading
//!
//! This module decodes Swagger documents from JSON or YAML into the
//! [`crate::swagger::Api`] model. Content of unknown format is checked as JSON
//! first and falls back to YAML.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use apidoc_schemas::loader::DocumentParser;
//! use std::path::Path;
//!
//! let api = DocumentParser::new().parse_file(Path::new("swagger.yaml"))?;
//! println!("Loaded {} definitions", api.definitions.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use parser::{DocumentParser, Format};
