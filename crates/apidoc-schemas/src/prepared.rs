//! Resolved documents ready for rendering
//!
//! [`Api::prepare`] runs both resolvers once over the document's definitions
//! and keeps the results for the document's lifetime. Renderers then query the
//! [`PreparedApi`] per endpoint, parameter and response.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::resolver::{
    diagnose, presentation_rows, resolve_all, resolve_all_rows, resolve_rows, resolve_value,
    RefKey, ResolutionIssue, ResolvedTable, ResolvedValue, Row,
};
use crate::swagger::{Api, Endpoint, Endpoints, Method, Parameter, Response, Schema};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Indent used for pretty-printed examples
const EXAMPLE_INDENT: &[u8] = b"    ";

/// One declared operation of a path
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Operation<'a> {
    pub method: Method,
    pub endpoint: &'a Endpoint,
}

/// Counters describing one prepare run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionStats {
    pub definitions: usize,
    pub resolved_values: usize,
    pub resolved_rows: usize,
    pub value_passes: usize,
    pub row_passes: usize,
}

/// A document whose definitions have been resolved
#[derive(Debug, Clone)]
pub struct PreparedApi {
    api: Api,
    values: ResolvedTable<ResolvedValue>,
    rows: ResolvedTable<Vec<Row>>,
    issues: Vec<ResolutionIssue>,
    stats: ResolutionStats,
}

impl Api {
    /// Resolve every definition once and freeze the results
    pub fn prepare(self) -> PreparedApi {
        PreparedApi::prepare(self)
    }
}

impl PreparedApi {
    pub fn prepare(api: Api) -> Self {
        let values = resolve_all(&api.definitions);
        let rows = resolve_all_rows(&api.definitions);

        let mut unresolved: Vec<RefKey> = values
            .unresolved
            .iter()
            .chain(&rows.unresolved)
            .cloned()
            .collect();
        unresolved.sort();
        unresolved.dedup();

        let issues = diagnose(&api.definitions, &unresolved);
        for issue in &issues {
            warn!("{}", issue);
        }

        let stats = ResolutionStats {
            definitions: api.definitions.len(),
            resolved_values: values.resolved.len(),
            resolved_rows: rows.resolved.len(),
            value_passes: values.passes,
            row_passes: rows.passes,
        };
        info!(
            definitions = stats.definitions,
            resolved = stats.resolved_values,
            issues = issues.len(),
            "Prepared document"
        );
        debug!(?stats, "Resolution passes");

        Self {
            api,
            values: values.resolved,
            rows: rows.resolved,
            issues,
            stats,
        }
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Give the document back, dropping the resolved tables
    pub fn into_api(self) -> Api {
        self.api
    }

    /// Diagnostics for definitions missing from the resolved tables
    pub fn issues(&self) -> &[ResolutionIssue] {
        &self.issues
    }

    pub fn stats(&self) -> ResolutionStats {
        self.stats
    }

    pub fn values(&self) -> &ResolvedTable<ResolvedValue> {
        &self.values
    }

    pub fn rows_table(&self) -> &ResolvedTable<Vec<Row>> {
        &self.rows
    }

    /// Example value for a schema, absent when it cannot be resolved
    pub fn object(&self, schema: Option<&Schema>) -> Option<ResolvedValue> {
        resolve_value(&self.values, schema?)
    }

    /// Presentation rows for a schema, empty when it cannot be resolved
    pub fn rows(&self, schema: Option<&Schema>) -> Vec<Row> {
        schema
            .and_then(|schema| resolve_rows(&self.rows, schema, &[], false))
            .map(presentation_rows)
            .unwrap_or_default()
    }

    /// Example value of a named definition
    pub fn definition_object(&self, name: &str) -> Option<&ResolvedValue> {
        self.values.get(RefKey::definition(name).as_str())
    }

    /// Presentation rows of a named definition
    pub fn definition_rows(&self, name: &str) -> Vec<Row> {
        self.rows
            .get(RefKey::definition(name).as_str())
            .map(|rows| presentation_rows(rows.clone()))
            .unwrap_or_default()
    }

    /// Operations declared on a path, in documentation order
    pub fn endpoint_set<'a>(&self, endpoints: &'a Endpoints) -> Vec<Operation<'a>> {
        Method::ALL
            .iter()
            .filter_map(|&method| {
                endpoints
                    .get_method(method)
                    .map(|endpoint| Operation { method, endpoint })
            })
            .collect()
    }

    /// Parameters other than the request body
    pub fn parameters<'a>(&self, endpoint: &'a Endpoint) -> Vec<&'a Parameter> {
        endpoint.parameters.iter().filter(|p| !p.is_body()).collect()
    }

    pub fn has_tag(&self, endpoint: &Endpoint, tag: &str) -> bool {
        endpoint.has_tag(tag)
    }

    fn body_schema<'a>(&self, endpoint: &'a Endpoint) -> Option<&'a Schema> {
        endpoint.body_parameter().and_then(|p| p.schema.as_ref())
    }

    /// Request body example as indented JSON, empty when absent
    pub fn body_example(&self, endpoint: &Endpoint) -> String {
        self.object(self.body_schema(endpoint))
            .map(|value| pretty_json(&value))
            .unwrap_or_default()
    }

    pub fn body_rows(&self, endpoint: &Endpoint) -> Vec<Row> {
        self.rows(self.body_schema(endpoint))
    }

    /// Response example as indented JSON, empty when absent
    pub fn response_example(&self, response: &Response) -> String {
        self.object(response.schema.as_ref())
            .map(|value| pretty_json(&value))
            .unwrap_or_default()
    }

    pub fn response_rows(&self, response: &Response) -> Vec<Row> {
        self.rows(response.schema.as_ref())
    }
}

/// Serialize a value as JSON with a four-space indent
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(EXAMPLE_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
