//! Render command handler

use crate::cli::{RenderArgs, RenderFormat};
use crate::config::{Config, RenderConfig, DEFAULT_DEST};
use crate::error::{Error, ErrorContext, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use crate::pdf::PdfExporter;
use crate::source::{output_path, Source};
use apidoc_schemas::{DocGenerator, PreparedApi, ResolutionIssue, ResolutionStats};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// The only template shipped with the binary
pub const DEFAULT_TEMPLATE: &str = "default";

/// Machine-readable summary of a render
#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    output: PathBuf,
    format: RenderFormat,
    stats: ResolutionStats,
    issues: &'a [ResolutionIssue],
}

/// Render settings after command-line flags override the config file
fn effective_settings(args: &RenderArgs, config: &RenderConfig) -> Result<RenderConfig> {
    let mut settings = config.clone();
    if let Some(format) = args.format {
        settings.format = format;
    }
    if let Some(template) = &args.template {
        settings.template = template.clone();
    }
    if let Some(dest) = &args.dest {
        settings.dest = Some(dest.clone());
    }
    settings.grayscale |= args.grayscale;
    settings.strict |= args.strict;

    if settings.template != DEFAULT_TEMPLATE {
        return Err(Error::invalid_args(format!(
            "unknown template '{}', available: {}",
            settings.template, DEFAULT_TEMPLATE
        )));
    }
    Ok(settings)
}

/// Handle the render command
#[instrument(skip_all, fields(source = %args.source))]
pub async fn handle_render(
    args: RenderArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let timer = Timer::with_details("render_command", &args.source);
    let settings = effective_settings(&args, &config.render)?;
    let source = Source::parse(&args.source);

    let spinner = output.spinner(&format!("Loading {}", source));
    let loaded = source.load(&config.fetch).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let prepared = loaded?.prepare();

    check_issues(&prepared, settings.strict, output)?;

    let generator = DocGenerator::with_config(settings.document.clone());
    let markup = generator.generate(&prepared, settings.format.markup());

    let bytes = match settings.format {
        RenderFormat::Pdf => {
            let spinner = output.spinner("Converting to PDF");
            let rendered = PdfExporter::from_config(&settings).render(&markup).await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            rendered?
        }
        RenderFormat::Html | RenderFormat::Markdown => markup.into_bytes(),
    };

    let dest = settings.dest.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DEST));
    std::fs::create_dir_all(&dest)
        .with_context(|| format!("creating {}", dest.display()))?;
    let path = output_path(&dest, &source, settings.format.extension());
    std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(
        path = %path.display(),
        format = %settings.format,
        bytes = bytes.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Document written"
    );

    output.success(&format!("✓ Rendered {}", path.display()))?;
    if output.format() != crate::cli::OutputFormat::Human {
        output.data(&RenderReport {
            output: path,
            format: settings.format,
            stats: prepared.stats(),
            issues: prepared.issues(),
        })?;
    }
    Ok(())
}

/// Fail in strict mode, otherwise report what will be missing from the output
fn check_issues(prepared: &PreparedApi, strict: bool, output: &mut OutputWriter) -> Result<()> {
    let issues = prepared.issues();
    if issues.is_empty() {
        return Ok(());
    }

    if strict {
        let details = issues
            .iter()
            .map(|issue| format!("  - {}", issue))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(Error::Unresolved {
            count: issues.len(),
            details,
        });
    }

    warn!(count = issues.len(), "Rendering with unresolved definitions");
    output.warning(&format!(
        "⚠ {} definition issue(s), affected examples and tables are left out",
        issues.len()
    ))?;
    for issue in issues {
        output.warning(&format!("  - {}", issue))?;
    }
    Ok(())
}
