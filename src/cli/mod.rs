//! Command-line interface for deployenv.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ManifestArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
