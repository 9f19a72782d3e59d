//! HTML to PDF conversion through an external wkhtmltopdf process

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Converts rendered HTML pages into PDF documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfExporter {
    pub binary: PathBuf,
    pub dpi: u32,
    pub grayscale: bool,
}

impl PdfExporter {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            binary: config.wkhtmltopdf.clone(),
            dpi: config.dpi,
            grayscale: config.grayscale,
        }
    }

    /// Command-line arguments; input and output are both standard streams
    pub fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            "--quiet".to_string(),
            "--dpi".to_string(),
            self.dpi.to_string(),
        ];
        if self.grayscale {
            args.push("--grayscale".to_string());
        }
        args.push("-".to_string());
        args.push("-".to_string());
        args
    }

    /// Convert `html` and return the PDF bytes
    pub async fn render(&self, html: &str) -> Result<Vec<u8>> {
        let _timer = Timer::with_details("pdf_render", &self.binary.to_string_lossy());
        let args = self.arguments();
        debug!(binary = %self.binary.display(), ?args, "Starting PDF converter");

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::pdf(format!(
                    "'{}' not found, install wkhtmltopdf or set render.wkhtmltopdf",
                    self.binary.display()
                )),
                _ => Error::Io(e),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::pdf("converter input is not available"))?;
        let input = html.as_bytes().to_vec();
        let feeder = tokio::spawn(async move {
            let written = stdin.write_all(&input).await;
            drop(stdin);
            written
        });

        let output = child.wait_with_output().await?;

        // A converter that fails early closes its input, so write errors are secondary
        if let Ok(Err(e)) = feeder.await {
            debug!(error = %e, "Converter stopped reading input");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("converter exited with {}", output.status)
            } else {
                stderr
            };
            return Err(Error::pdf(message));
        }

        info!(bytes = output.stdout.len(), "PDF rendered");
        Ok(output.stdout)
    }
}
