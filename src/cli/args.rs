//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Deployment environment resolution and client asset manifest.
#[derive(Debug, Parser)]
#[command(name = "deployenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show how values were determined
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print values only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show resolved deployment settings (default if no command specified)
    Show(ShowArgs),

    /// Print the client asset manifest for the bundler
    Manifest(ManifestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,

    /// Resolve from a KEY=value snapshot instead of the process environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ManifestArgs {
    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Print paths joined under this directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
