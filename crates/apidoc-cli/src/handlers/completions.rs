//! Shell completions command handler

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use clap::CommandFactory;
use clap_complete::generate;

/// Print the completion script for the requested shell
pub fn handle_completions(args: CompletionsArgs, output: &mut OutputWriter) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut script = Vec::new();
    generate(args.shell.to_clap_shell(), &mut cmd, name, &mut script);

    let script = String::from_utf8(script)
        .map_err(|e| Error::other(format!("completion script is not UTF-8: {}", e)))?;
    output.write(&script)
}
