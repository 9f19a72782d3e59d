//! Main documentation generator
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::templates::{anchor, HtmlTemplate, MarkdownTemplate, Template};
use crate::prepared::{pretty_json, Operation, PreparedApi};
use crate::resolver::{RefKey, Row};
use crate::swagger::{Api, Endpoint, Parameter};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const PARAMETER_HEADERS: [&str; 5] = ["Name", "In", "Type", "Required", "Description"];
const FIELD_HEADERS: [&str; 6] = ["Field", "Type", "Required", "Enum", "Example", "Description"];

/// Section title for operations without a declared tag
const UNTAGGED_SECTION: &str = "Other";

/// Documentation generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Include table of contents
    pub include_toc: bool,
    /// Include request and response examples
    pub include_examples: bool,
    /// Append a section documenting every definition
    pub include_definitions: bool,
    /// Include deprecated operations
    pub include_deprecated: bool,
    /// Stamp the footer with the generation time
    pub include_timestamp: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_toc: true,
            include_examples: true,
            include_definitions: false,
            include_deprecated: true,
            include_timestamp: true,
        }
    }
}

/// Markup produced by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocFormat {
    Html,
    Markdown,
}

impl DocFormat {
    /// File extension for documents of this format
    pub fn extension(&self) -> &'static str {
        match self {
            DocFormat::Html => "html",
            DocFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocFormat::Html => write!(f, "html"),
            DocFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Operations grouped under one heading
struct Section<'a> {
    title: &'a str,
    description: &'a str,
    operations: Vec<(&'a str, Operation<'a>)>,
}

/// Main documentation generator
#[derive(Debug, Clone, Default)]
pub struct DocGenerator {
    config: GeneratorConfig,
}

impl DocGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Render a prepared document
    pub fn generate(&self, prepared: &PreparedApi, format: DocFormat) -> String {
        debug!(%format, "Generating documentation");
        match format {
            DocFormat::Html => self.render(prepared, &HtmlTemplate),
            DocFormat::Markdown => self.render(prepared, &MarkdownTemplate),
        }
    }

    fn render(&self, prepared: &PreparedApi, template: &dyn Template) -> String {
        let api = prepared.api();
        let title = if api.info.title.is_empty() {
            "API Documentation"
        } else {
            api.info.title.as_str()
        };
        let sections = self.collect_sections(prepared);

        let mut doc = template.document_start(title);
        doc.push_str(&template.header(title, &api.info.version, &api.info.description));

        let facts = overview_facts(api);
        if !facts.is_empty() {
            doc.push_str(&template.facts(&facts));
        }

        if self.config.include_toc {
            let entries = self.toc_entries(api, &sections);
            if !entries.is_empty() {
                doc.push_str(&template.table_of_contents(&entries));
            }
        }

        for section in &sections {
            doc.push_str(&template.heading(2, section.title, &anchor(section.title)));
            if !section.description.is_empty() {
                doc.push_str(&template.paragraph(section.description));
            }
            for (path, operation) in &section.operations {
                doc.push_str(&self.render_operation(prepared, template, section, path, operation));
            }
        }

        if self.config.include_definitions && !api.definitions.is_empty() {
            doc.push_str(&self.render_definitions(prepared, template));
        }

        let generated_at = self
            .config
            .include_timestamp
            .then(|| chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string());
        doc.push_str(&template.footer(generated_at.as_deref()));
        doc.push_str(&template.document_end());
        doc
    }

    /// One section per declared tag, then the untagged operations
    fn collect_sections<'a>(&self, prepared: &'a PreparedApi) -> Vec<Section<'a>> {
        let api = prepared.api();
        let operations: Vec<(&'a str, Operation<'a>)> = api
            .paths
            .iter()
            .flat_map(|(path, endpoints)| {
                prepared
                    .endpoint_set(endpoints)
                    .into_iter()
                    .map(move |operation| (path.as_str(), operation))
            })
            .filter(|(_, operation)| self.config.include_deprecated || !operation.endpoint.deprecated)
            .collect();

        let mut sections: Vec<Section<'a>> = api
            .tags
            .iter()
            .map(|tag| Section {
                title: tag.name.as_str(),
                description: tag.description.as_str(),
                operations: operations
                    .iter()
                    .filter(|(_, operation)| prepared.has_tag(operation.endpoint, &tag.name))
                    .copied()
                    .collect(),
            })
            .filter(|section| !section.operations.is_empty())
            .collect();

        let untagged: Vec<(&'a str, Operation<'a>)> = operations
            .iter()
            .filter(|(_, operation)| {
                !api.tags
                    .iter()
                    .any(|tag| prepared.has_tag(operation.endpoint, &tag.name))
            })
            .copied()
            .collect();
        if !untagged.is_empty() {
            sections.push(Section {
                title: UNTAGGED_SECTION,
                description: "",
                operations: untagged,
            });
        }

        sections
    }

    fn toc_entries(&self, api: &Api, sections: &[Section<'_>]) -> Vec<(String, String, usize)> {
        let mut entries = Vec::new();
        for section in sections {
            entries.push((section.title.to_string(), anchor(section.title), 1));
            for (path, operation) in &section.operations {
                let title = operation_title(path, operation);
                let target = operation_anchor(&title, section);
                entries.push((title, target, 2));
            }
        }
        if self.config.include_definitions && !api.definitions.is_empty() {
            entries.push(("Definitions".to_string(), "definitions".to_string(), 1));
        }
        entries
    }

    fn render_operation(
        &self,
        prepared: &PreparedApi,
        template: &dyn Template,
        section: &Section<'_>,
        path: &str,
        operation: &Operation<'_>,
    ) -> String {
        let endpoint = operation.endpoint;
        let title = operation_title(path, operation);
        let base = operation_anchor(&title, section);

        let mut doc = template.heading(3, &title, &base);
        if endpoint.deprecated {
            doc.push_str(&template.badge("Deprecated"));
        }
        if !endpoint.summary.is_empty() {
            doc.push_str(&template.paragraph(&endpoint.summary));
        }
        if !endpoint.description.is_empty() {
            doc.push_str(&template.paragraph(&endpoint.description));
        }

        let parameters = prepared.parameters(endpoint);
        if !parameters.is_empty() {
            doc.push_str(&template.heading(4, "Parameters", &format!("{}-parameters", base)));
            let rows: Vec<Vec<String>> = parameters.iter().map(|p| parameter_cells(p)).collect();
            doc.push_str(&template.table(&PARAMETER_HEADERS, &rows));
        }

        doc.push_str(&self.render_body(prepared, template, endpoint, &base));

        if !endpoint.responses.is_empty() {
            doc.push_str(&template.heading(4, "Responses", &format!("{}-responses", base)));
            for (status, response) in &endpoint.responses {
                doc.push_str(&template.heading(5, status, &format!("{}-{}", base, anchor(status))));
                if !response.description.is_empty() {
                    doc.push_str(&template.paragraph(&response.description));
                }
                let example = prepared.response_example(response);
                let rows = prepared.response_rows(response);
                doc.push_str(&self.render_payload(template, &example, &rows));
            }
        }

        doc
    }

    fn render_body(
        &self,
        prepared: &PreparedApi,
        template: &dyn Template,
        endpoint: &Endpoint,
        base: &str,
    ) -> String {
        let example = prepared.body_example(endpoint);
        let rows = prepared.body_rows(endpoint);
        let payload = self.render_payload(template, &example, &rows);
        if payload.is_empty() {
            return payload;
        }
        let mut doc = template.heading(4, "Request Body", &format!("{}-request-body", base));
        doc.push_str(&payload);
        doc
    }

    fn render_payload(&self, template: &dyn Template, example: &str, rows: &[Row]) -> String {
        let mut doc = String::new();
        if self.config.include_examples && !example.is_empty() {
            doc.push_str(&template.code_block("json", example));
        }
        if !rows.is_empty() {
            let cells: Vec<Vec<String>> = rows.iter().map(row_cells).collect();
            doc.push_str(&template.table(&FIELD_HEADERS, &cells));
        }
        doc
    }

    fn render_definitions(&self, prepared: &PreparedApi, template: &dyn Template) -> String {
        let mut doc = template.heading(2, "Definitions", "definitions");
        for name in prepared.api().definitions.keys() {
            doc.push_str(&template.heading(3, name, &format!("definition-{}", anchor(name))));

            let key = RefKey::definition(name);
            let issues: Vec<String> = prepared
                .issues()
                .iter()
                .filter(|issue| issue.definitions().contains(&&key))
                .map(ToString::to_string)
                .collect();
            if !issues.is_empty() {
                doc.push_str(&template.badge("Unresolved"));
                for issue in issues {
                    doc.push_str(&template.paragraph(&issue));
                }
                continue;
            }

            let example = prepared
                .definition_object(name)
                .map(pretty_json)
                .unwrap_or_default();
            let rows = prepared.definition_rows(name);
            doc.push_str(&self.render_payload(template, &example, &rows));
        }
        doc
    }
}

fn operation_title(path: &str, operation: &Operation<'_>) -> String {
    format!("{} {}", operation.method, path)
}

/// An operation listed under several tags gets one anchor per section
fn operation_anchor(title: &str, section: &Section<'_>) -> String {
    format!("{}-{}", anchor(title), anchor(section.title))
}

fn overview_facts(api: &Api) -> Vec<(&'static str, String)> {
    let mut facts = Vec::new();
    if !api.host.is_empty() {
        facts.push(("Host", api.host.clone()));
    }
    if !api.base_path.is_empty() {
        facts.push(("Base path", api.base_path.clone()));
    }
    if !api.schemes.is_empty() {
        facts.push(("Schemes", api.schemes.join(", ")));
    }
    if !api.info.terms_of_service.is_empty() {
        facts.push(("Terms of service", api.info.terms_of_service.clone()));
    }
    if let Some(contact) = &api.info.contact {
        let parts: Vec<&str> = [&contact.name, &contact.email, &contact.url]
            .into_iter()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();
        if !parts.is_empty() {
            facts.push(("Contact", parts.join(", ")));
        }
    }
    if !api.info.license.name.is_empty() {
        facts.push(("License", api.info.license.name.clone()));
    }
    facts
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

fn parameter_cells(parameter: &Parameter) -> Vec<String> {
    let mut type_text = parameter
        .param_type
        .map_or(String::new(), |t| t.as_str().to_string());
    if !parameter.format.is_empty() {
        type_text.push_str(&format!(" ({})", parameter.format));
    }
    vec![
        parameter.name.clone(),
        parameter.location.clone(),
        type_text,
        yes_no(parameter.required),
        parameter.description.clone(),
    ]
}

fn row_cells(row: &Row) -> Vec<String> {
    vec![
        row.name.clone(),
        row.type_name().to_string(),
        yes_no(row.required),
        row.enum_text.clone(),
        row.example.clone(),
        row.description.clone(),
    ]
}
