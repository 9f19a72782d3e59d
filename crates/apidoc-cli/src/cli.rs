//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Apidoc - Render Swagger 2.0 documents as HTML, Markdown or PDF
///
/// Resolves every schema definition of the document once, then renders the
/// endpoints with example payloads and field tables.
#[derive(Parser, Debug)]
#[command(
    name = "apidoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "APIDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render documentation from a local file or an http(s) URL
    Render(RenderArgs),

    /// Show resolved examples, field rows and resolution issues
    Inspect(InspectArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Swagger document path or http(s) URL (JSON or YAML)
    #[arg(value_name = "SRC")]
    pub source: String,

    /// Directory the rendered file is written into [default: dist]
    #[arg(short, long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Output document format
    #[arg(short, long, value_enum)]
    pub format: Option<RenderFormat>,

    /// Template used for rendering
    #[arg(short, long)]
    pub template: Option<String>,

    /// Render the PDF in grayscale
    #[arg(long)]
    pub grayscale: bool,

    /// Fail when any definition cannot be resolved
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Swagger document path or http(s) URL (JSON or YAML)
    #[arg(value_name = "SRC")]
    pub source: String,

    /// Only show this definition
    #[arg(short, long, value_name = "NAME")]
    pub definition: Option<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize a default configuration file
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Initialize the user config instead of the project config (.apidoc.toml)
    #[arg(long)]
    pub user: bool,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Rendered document formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// PDF through wkhtmltopdf
    Pdf,
    /// Standalone HTML page
    Html,
    /// Markdown document
    Markdown,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl RenderFormat {
    /// File extension of the rendered output
    pub fn extension(self) -> &'static str {
        match self {
            RenderFormat::Pdf => "pdf",
            RenderFormat::Html => "html",
            RenderFormat::Markdown => "md",
        }
    }

    /// Markup generated before any conversion
    pub fn markup(self) -> apidoc_schemas::DocFormat {
        match self {
            RenderFormat::Pdf | RenderFormat::Html => apidoc_schemas::DocFormat::Html,
            RenderFormat::Markdown => apidoc_schemas::DocFormat::Markdown,
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Pdf => write!(f, "pdf"),
            RenderFormat::Html => write!(f, "html"),
            RenderFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_arguments() {
        let cli = Cli::parse_from([
            "apidoc",
            "render",
            "petstore.yaml",
            "--dest",
            "out",
            "--format",
            "markdown",
            "--strict",
        ]);

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.source, "petstore.yaml");
                assert_eq!(args.dest, Some(PathBuf::from("out")));
                assert_eq!(args.format, Some(RenderFormat::Markdown));
                assert!(args.strict);
                assert!(!args.grayscale);
                assert_eq!(args.template, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: OutputFormat::Human,
            no_color: false,
            command: Commands::Inspect(InspectArgs {
                source: "swagger.json".to_string(),
                definition: None,
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_render_format_mapping() {
        assert_eq!(RenderFormat::Pdf.extension(), "pdf");
        assert_eq!(RenderFormat::Markdown.extension(), "md");
        assert_eq!(RenderFormat::Pdf.markup(), apidoc_schemas::DocFormat::Html);
        assert_eq!(
            RenderFormat::Markdown.markup(),
            apidoc_schemas::DocFormat::Markdown
        );
    }
}
