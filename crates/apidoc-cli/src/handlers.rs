//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod inspect;
mod render;

pub use completions::handle_completions;
pub use config::handle_config;
pub use inspect::handle_inspect;
pub use render::handle_render;
