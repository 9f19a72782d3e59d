//! Inspect command handler

use crate::cli::{InspectArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use crate::source::Source;
use apidoc_schemas::{pretty_json, PreparedApi, ResolutionIssue, ResolutionStats, Row};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct DefinitionReport {
    name: String,
    /// Absent when the definition did not resolve
    example: Option<Value>,
    rows: Vec<Row>,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    title: &'a str,
    version: &'a str,
    stats: ResolutionStats,
    definitions: Vec<DefinitionReport>,
    issues: &'a [ResolutionIssue],
}

fn build_report<'a>(prepared: &'a PreparedApi, only: Option<&str>) -> Result<InspectReport<'a>> {
    let api = prepared.api();
    let names: Vec<&str> = match only {
        Some(name) if api.definitions.contains_key(name) => vec![name],
        Some(name) => {
            return Err(Error::DefinitionNotFound {
                name: name.to_string(),
            })
        }
        None => api.definitions.keys().map(String::as_str).collect(),
    };

    let definitions = names
        .into_iter()
        .map(|name| DefinitionReport {
            name: name.to_string(),
            example: prepared.definition_object(name).map(|value| value.to_json()),
            rows: prepared.definition_rows(name),
        })
        .collect();

    Ok(InspectReport {
        title: &api.info.title,
        version: &api.info.version,
        stats: prepared.stats(),
        definitions,
        issues: prepared.issues(),
    })
}

/// Handle the inspect command
#[instrument(skip_all, fields(source = %args.source))]
pub async fn handle_inspect(
    args: InspectArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let source = Source::parse(&args.source);
    let spinner = output.spinner(&format!("Loading {}", source));
    let loaded = source.load(&config.fetch).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let prepared = loaded?.prepare();
    let report = build_report(&prepared, args.definition.as_deref())?;

    if output.format() != OutputFormat::Human {
        return output.data(&report);
    }

    output.info(&format!("{} {}", report.title, report.version))?;
    for definition in &report.definitions {
        output.section(&definition.name)?;
        match &definition.example {
            Some(example) => output.writeln(&pretty_json(example))?,
            None => output.warning("unresolved")?,
        }
        if !definition.rows.is_empty() {
            output.writeln("")?;
            output.table(
                &["Field", "Type", "Required", "Enum", "Example"],
                definition.rows.iter().map(row_cells).collect(),
            )?;
        }
    }

    output.section("Resolution")?;
    output.info(&format!(
        "{} definitions, {} values and {} row sets resolved in {}/{} passes",
        report.stats.definitions,
        report.stats.resolved_values,
        report.stats.resolved_rows,
        report.stats.value_passes,
        report.stats.row_passes
    ))?;
    output.issues(report.issues)
}

fn row_cells(row: &Row) -> Vec<String> {
    vec![
        row.name.clone(),
        row.type_name().to_string(),
        if row.required { "yes" } else { "no" }.to_string(),
        row.enum_text.clone(),
        row.example.clone(),
    ]
}
