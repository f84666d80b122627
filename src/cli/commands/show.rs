//! Show command implementation.
//!
//! The `deployenv show` command prints the resolved deployment settings.

use crate::cli::args::ShowArgs;
use crate::config::{self, AssetManifest, EnvFileParser, Settings};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }

    /// Resolve from the snapshot file if given, else the live environment.
    fn resolve(&self) -> Result<Settings> {
        match &self.args.env_file {
            Some(path) => {
                let snapshot = EnvFileParser::load(path)?;
                Ok(Settings::resolve_with_env(snapshot.lookup()))
            }
            None => Ok(config::init().clone()),
        }
    }

    fn show_human(&self, settings: &Settings, ui: &mut dyn UserInterface) {
        let details = ui.output_mode().shows_details();
        let manifest = settings.asset_manifest();

        ui.show_header("Deployment settings");
        ui.show_field("Environment", settings.environment().as_str());
        if details {
            ui.show_field("Source", &settings.source().to_string());
        }
        ui.show_field("Version", settings.current_version_id().unwrap_or("unset"));
        ui.show_field("Development", &settings.is_development().to_string());
        ui.show_field("Production", &settings.is_production().to_string());
        ui.show_field("Debug", &settings.is_debug().to_string());
        ui.show_field("Query limit", &settings.default_query_limit().to_string());
        ui.show_field("Assets", &manifest.len().to_string());
        if details {
            show_assets(&manifest, ui);
        }
    }
}

fn show_assets(manifest: &AssetManifest, ui: &mut dyn UserInterface) {
    for entry in manifest.entries() {
        ui.message(&format!("    {} ({})", entry.path, entry.kind.as_str()));
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.resolve()?;

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&settings)?);
        } else if self.args.yaml {
            ui.data(serde_yaml::to_string(&settings)?.trim_end());
        } else {
            self.show_human(&settings, ui);
        }

        Ok(CommandResult::success())
    }
}
