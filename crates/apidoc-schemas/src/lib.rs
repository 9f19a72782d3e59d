//! Apidoc Schemas - Swagger 2.0 model, resolution and documentation
//!
//! This crate turns a Swagger 2.0 document into rendered API documentation:
//! - **Loading**: JSON or YAML documents decoded into the [`swagger::Api`] model
//! - **Resolution**: example values and flattened field rows for every named
//!   definition, computed once by a fixed-point resolver
//! - **Diagnostics**: explanations for definitions caught in reference
//!   cycles or pointing at missing definitions
//! - **Documentation**: Markdown or standalone HTML output
//!
//! ## Quick Start
//!
//! ```rust
//! use apidoc_schemas::{DocFormat, DocGenerator, DocumentParser};
//! use std::path::Path;
//!
//! let document = br##"{
//!     "swagger": "2.0",
//!     "info": {"title": "Pets", "version": "1.0"},
//!     "definitions": {
//!         "Pet": {
//!             "type": "object",
//!             "required": ["name"],
//!             "properties": {"name": {"type": "string", "example": "Rex"}}
//!         }
//!     }
//! }"##;
//!
//! let api = DocumentParser::new().parse_bytes(document, Path::new("pets.json"))?;
//! let prepared = api.prepare();
//! assert!(prepared.issues().is_empty());
//!
//! let markdown = DocGenerator::new().generate(&prepared, DocFormat::Markdown);
//! assert!(markdown.starts_with("# Pets"));
//! # Ok::<(), apidoc_schemas::LoaderError>(())
//! ```
//!
//! ## Resolution Rules
//!
//! - `$ref` targets resolve in any declaration order
//! - An object resolves only when every property resolves
//! - An array example holds exactly one resolved item
//! - Definitions in a reference cycle are left out and reported
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod documentation;
pub mod loader;
pub mod prepared;
pub mod resolver;
pub mod swagger;

// Re-export commonly used types for convenience
pub use documentation::{DocFormat, DocGenerator, GeneratorConfig};
pub use loader::{DocumentParser, Format, LoaderError, LoaderResult};
pub use prepared::{pretty_json, Operation, PreparedApi, ResolutionStats};
pub use resolver::{ResolutionIssue, ResolvedValue, RefKey, Row};
pub use swagger::{Api, Definitions, Schema, SchemaType};
