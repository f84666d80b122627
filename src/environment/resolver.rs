//! Environment resolution.
//!
//! Maps a platform detection result onto exactly one of the two deployment
//! environments:
//! 1. Managed platform marker present: production
//! 2. Otherwise: development

use serde::Serialize;

use super::detection::{PlatformDetection, PlatformDetector};

/// The deployment environment a process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    /// Local or unmanaged hosting.
    #[default]
    Development,
    /// The managed hosting platform.
    Production,
}

impl DeploymentEnvironment {
    /// Check if this is the development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Get the environment name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl std::fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the environment was determined.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentSource {
    /// The platform marker matched; carries the marker value.
    PlatformMarker(String),
    /// No marker matched.
    Fallback,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlatformMarker(marker) => write!(f, "detected via SERVER_SOFTWARE={}", marker),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved environment and how it was determined.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnvironment {
    /// The deployment environment.
    pub environment: DeploymentEnvironment,
    /// How this environment was determined.
    pub source: EnvironmentSource,
}

impl ResolvedEnvironment {
    /// Resolve the environment using the given detector.
    ///
    /// # Example
    ///
    /// ```
    /// use deployenv::environment::{DeploymentEnvironment, PlatformDetector, ResolvedEnvironment};
    ///
    /// let resolved = ResolvedEnvironment::resolve_with_detection(None);
    /// assert_eq!(resolved.environment, DeploymentEnvironment::Development);
    ///
    /// // Live lookup; the result depends on the host.
    /// let _ = ResolvedEnvironment::resolve(&PlatformDetector::new());
    /// ```
    pub fn resolve(detector: &PlatformDetector) -> Self {
        Self::resolve_with_detection(detector.detect())
    }

    /// Resolve with a pre-computed detection result (for testing).
    pub fn resolve_with_detection(detected: Option<PlatformDetection>) -> Self {
        let resolved = match detected {
            Some(detection) => Self {
                environment: DeploymentEnvironment::Production,
                source: EnvironmentSource::PlatformMarker(detection.detected_via),
            },
            None => Self {
                environment: DeploymentEnvironment::Development,
                source: EnvironmentSource::Fallback,
            },
        };

        tracing::debug!(
            "Resolved {} environment ({})",
            resolved.environment,
            resolved.source
        );
        resolved
    }
}
