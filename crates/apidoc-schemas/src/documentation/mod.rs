//! API documentation generation
//!
//! Renders a [`crate::PreparedApi`] as a single Markdown document or a
//! standalone HTML page. The HTML output is also the input for PDF export.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod generator;
pub mod templates;

pub use generator::{DocFormat, DocGenerator, GeneratorConfig};
pub use templates::{anchor, escape_html, HtmlTemplate, MarkdownTemplate, Template};

/// Render a prepared document with the default configuration
pub fn generate_docs(prepared: &crate::PreparedApi, format: DocFormat) -> String {
    DocGenerator::new().generate(prepared, format)
}
