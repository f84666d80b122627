//! Resolved process settings.
//!
//! [`Settings`] is computed once from the host environment and never
//! mutated. Pass `&Settings` to consumers; [`init`] and [`global`] exist for
//! entry points that need publish-once process-wide access.

use std::env::VarError;
use std::sync::OnceLock;

use serde::Serialize;

use crate::environment::{
    present_value, DeploymentEnvironment, EnvironmentSource, PlatformDetector,
    ResolvedEnvironment,
};

use super::manifest::AssetManifest;

/// Environment variable carrying the deployment version identifier.
pub const CURRENT_VERSION_ID_VAR: &str = "CURRENT_VERSION_ID";

/// Default row limit for data queries.
pub const DEFAULT_QUERY_LIMIT: u32 = 64;

static GLOBAL: OnceLock<Settings> = OnceLock::new();

/// Immutable deployment settings.
///
/// # Example
///
/// ```
/// use deployenv::config::Settings;
///
/// let settings = Settings::resolve_with_env(|key| match key {
///     "SERVER_SOFTWARE" => Ok("Google App Engine/1.9".to_string()),
///     "CURRENT_VERSION_ID" => Ok("42.abcdef".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
///
/// assert!(settings.is_production());
/// assert!(!settings.is_debug());
/// assert_eq!(settings.current_version_id(), Some("42.abcdef"));
/// assert_eq!(settings.default_query_limit(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    environment: DeploymentEnvironment,
    #[serde(skip)]
    source: EnvironmentSource,
    current_version_id: Option<String>,
    is_development: bool,
    is_production: bool,
    is_debug: bool,
    default_query_limit: u32,
    client_asset_manifest: AssetManifest,
}

impl Settings {
    /// Resolve from the live process environment.
    pub fn from_env() -> Self {
        Self::resolve_with_env(|key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup.
    ///
    /// Never fails: an absent version id stays unset and an absent or
    /// unrecognized platform marker resolves to development. Non-unicode
    /// values count as present and are decoded lossily.
    pub fn resolve_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let detected = PlatformDetector::new().detect_with_env(&env_fn);
        let resolved = ResolvedEnvironment::resolve_with_detection(detected);
        let current_version_id = present_value(env_fn(CURRENT_VERSION_ID_VAR));
        Self::from_resolved(resolved, current_version_id)
    }

    /// Build settings from an already resolved environment.
    pub fn from_resolved(
        resolved: ResolvedEnvironment,
        current_version_id: Option<String>,
    ) -> Self {
        let environment = resolved.environment;
        Self {
            environment,
            source: resolved.source,
            current_version_id,
            is_development: environment.is_development(),
            is_production: environment.is_production(),
            is_debug: environment.is_development(),
            default_query_limit: DEFAULT_QUERY_LIMIT,
            client_asset_manifest: AssetManifest::client(),
        }
    }

    /// The deployment environment.
    pub fn environment(&self) -> DeploymentEnvironment {
        self.environment
    }

    /// How the environment was determined.
    pub fn source(&self) -> &EnvironmentSource {
        &self.source
    }

    /// The deployment version identifier, verbatim. `None` when unset.
    pub fn current_version_id(&self) -> Option<&str> {
        self.current_version_id.as_deref()
    }

    /// Whether the process runs outside the managed platform.
    pub fn is_development(&self) -> bool {
        self.is_development
    }

    /// Whether the process runs on the managed platform.
    pub fn is_production(&self) -> bool {
        self.is_production
    }

    /// Debug mode; always equal to [`Settings::is_development`].
    pub fn is_debug(&self) -> bool {
        self.is_debug
    }

    /// Default row limit for data queries; always [`DEFAULT_QUERY_LIMIT`].
    pub fn default_query_limit(&self) -> u32 {
        self.default_query_limit
    }

    /// The client asset manifest read by the bundler.
    pub fn asset_manifest(&self) -> AssetManifest {
        self.client_asset_manifest
    }
}

/// Resolve settings from the live environment and publish them process-wide.
///
/// The first call resolves; later calls return the same instance. Call this
/// before spawning anything that reads [`global`].
pub fn init() -> &'static Settings {
    GLOBAL.get_or_init(|| {
        let settings = Settings::from_env();
        tracing::debug!(
            "Published {} settings (version: {})",
            settings.environment(),
            settings.current_version_id().unwrap_or("unset")
        );
        settings
    })
}

/// The published settings, if [`init`] has run.
pub fn global() -> Option<&'static Settings> {
    GLOBAL.get()
}
