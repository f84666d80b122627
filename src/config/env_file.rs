//! Snapshot env file parsing.
//!
//! A snapshot records a host's environment in `KEY=value` lines so settings
//! can be resolved offline, e.g. against a production host's variables.

use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use crate::error::{DeployEnvError, Result};

/// Parsed snapshot of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Values with equals signs: `VERSION=1=2`
///
/// # Example
///
/// ```
/// use deployenv::config::{EnvFileParser, Settings};
///
/// let snapshot = EnvFileParser::parse(r#"
/// # captured on the production host
/// SERVER_SOFTWARE="Google App Engine/1.9.38"
/// CURRENT_VERSION_ID=42.abcdef
/// "#);
///
/// let settings = Settings::resolve_with_env(snapshot.lookup());
/// assert!(settings.is_production());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvFileParser {
    vars: HashMap<String, String>,
}

impl EnvFileParser {
    /// Parse snapshot content. Lines without `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let vars = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect();

        Self { vars }
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), Self::unquote(value.trim()).to_string()))
    }

    fn unquote(value: &str) -> &str {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

    /// Load and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DeployEnvError::EnvFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!("Loaded env snapshot from {}", path.display());
        Ok(Self::parse(&content))
    }

    /// Get a variable from the snapshot.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot has no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Lookup closure compatible with `std::env::var`.
    ///
    /// Variables missing from the snapshot are reported as not present.
    pub fn lookup(&self) -> impl Fn(&str) -> std::result::Result<String, VarError> + '_ {
        move |key: &str| self.get(key).map(str::to_string).ok_or(VarError::NotPresent)
    }
}
