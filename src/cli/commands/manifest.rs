//! Manifest command implementation.
//!
//! The `deployenv manifest` command prints the client asset manifest, one
//! path per line, in the order the bundler should read them.

use crate::cli::args::ManifestArgs;
use crate::config::AssetManifest;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The manifest command implementation.
pub struct ManifestCommand {
    args: ManifestArgs,
    manifest: AssetManifest,
}

impl ManifestCommand {
    /// Create a new manifest command over the client manifest.
    pub fn new(args: ManifestArgs) -> Self {
        Self::with_manifest(args, AssetManifest::client())
    }

    /// Create a manifest command over a specific manifest (for testing).
    pub fn with_manifest(args: ManifestArgs, manifest: AssetManifest) -> Self {
        Self { args, manifest }
    }

    fn paths(&self) -> Vec<String> {
        match &self.args.root {
            Some(root) => self
                .manifest
                .resolve_under(root)
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            None => self.manifest.iter().map(str::to_string).collect(),
        }
    }
}

impl Command for ManifestCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paths = self.paths();
        tracing::debug!("Emitting {} manifest entries", paths.len());

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&paths)?);
        } else {
            for path in &paths {
                ui.data(path);
            }
        }

        Ok(CommandResult::success())
    }
}
