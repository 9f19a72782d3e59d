//! Where a document comes from and where its rendering goes

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::fetch::fetch_document;
use apidoc_schemas::{Api, DocumentParser};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Output stem used when the source names no file
const FALLBACK_STEM: &str = "swagger";

/// A document location given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    /// Classify `input`; only `http` and `https` URLs count as remote
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            _ => Self::Local(PathBuf::from(input)),
        }
    }

    /// Last path segment of the source, used to name outputs and pick a parser
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|name| !name.is_empty()),
            Self::Local(path) => path.file_name().and_then(|name| name.to_str()),
        }
    }

    /// File stem the rendered output is named after
    pub fn stem(&self) -> &str {
        self.file_name()
            .map(Path::new)
            .and_then(|name| name.file_stem())
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(FALLBACK_STEM)
    }

    /// Read and decode the document
    pub async fn load(&self, config: &FetchConfig) -> Result<Api> {
        let parser = DocumentParser::new();
        match self {
            Self::Remote(url) => {
                let body = fetch_document(url, config).await?;
                let origin = PathBuf::from(self.file_name().unwrap_or(FALLBACK_STEM));
                Ok(parser.parse_bytes(&body, &origin)?)
            }
            Self::Local(path) => {
                if !path.is_file() {
                    return Err(Error::FileNotFound { path: path.clone() });
                }
                debug!(path = %path.display(), "Reading local document");
                Ok(parser.parse_file(path)?)
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(
                f,
                "{}",
                crate::logging::redaction::redact_url(url.as_str())
            ),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Path of the rendered file: `<dest>/<source stem>.<extension>`
pub fn output_path(dest: &Path, source: &Source, extension: &str) -> PathBuf {
    dest.join(format!("{}.{}", source.stem(), extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_classifies_sources() {
        assert!(matches!(
            Source::parse("https://example.com/v2/swagger.json"),
            Source::Remote(_)
        ));
        assert!(matches!(
            Source::parse("http://localhost:8080/api-docs"),
            Source::Remote(_)
        ));
        assert_eq!(
            Source::parse("docs/petstore.yaml"),
            Source::Local(PathBuf::from("docs/petstore.yaml"))
        );
        assert!(matches!(Source::parse("ftp://host/a.json"), Source::Local(_)));
        assert!(matches!(Source::parse("C:\\specs\\a.json"), Source::Local(_)));
    }

    #[test]
    fn test_output_names() {
        let local = Source::parse("docs/petstore.yaml");
        assert_eq!(
            output_path(Path::new("out"), &local, "pdf"),
            PathBuf::from("out/petstore.pdf")
        );

        let remote = Source::parse("https://example.com/v2/api.json?token=abc");
        assert_eq!(remote.stem(), "api");

        let bare = Source::parse("https://example.com/");
        assert_eq!(bare.stem(), FALLBACK_STEM);
    }

    #[test]
    fn test_display_redacts_credentials() {
        let remote = Source::parse("https://user:pw@example.com/swagger.json?api_key=k");
        let shown = remote.to_string();
        assert!(!shown.contains("pw"));
        assert!(!shown.contains("api_key=k"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::Local(dir.path().join("missing.json"));
        let error = source.load(&FetchConfig::default()).await.unwrap_err();
        assert!(matches!(error, Error::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_local_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.yml");
        std::fs::write(&path, "swagger: \"2.0\"\ninfo:\n  title: Tiny\n  version: 1\n").unwrap();

        let api = Source::Local(path).load(&FetchConfig::default()).await.unwrap();
        assert_eq!(api.info.title, "Tiny");
        assert_eq!(api.info.version, "1");
    }
}
