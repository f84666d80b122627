//! Managed hosting platform detection.
//!
//! Checks the `SERVER_SOFTWARE` marker that managed hosting platforms set
//! to identify themselves.

use std::env::VarError;

/// Environment variable carrying the host platform marker.
pub const SERVER_SOFTWARE_VAR: &str = "SERVER_SOFTWARE";

/// Marker prefix identifying the managed hosting platform.
pub const MANAGED_PLATFORM_PREFIX: &str = "Google App Engine";

/// A managed hosting platform detected from the platform marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDetection {
    /// The full marker value that triggered detection.
    pub detected_via: String,
}

/// Detects whether the process runs on the managed hosting platform.
///
/// # Example
///
/// ```
/// use deployenv::environment::PlatformDetector;
///
/// let detected = PlatformDetector::new().detect_with_env(|_| {
///     Ok("Google App Engine/1.9".to_string())
/// });
/// assert!(detected.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlatformDetector;

impl PlatformDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }

    /// Detect from the live process environment.
    pub fn detect(&self) -> Option<PlatformDetection> {
        self.detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    ///
    /// An unset marker is treated as empty, which never matches. A
    /// non-unicode marker is still matched on its lossy decoding.
    pub fn detect_with_env<F>(&self, env_fn: F) -> Option<PlatformDetection>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let marker = present_value(env_fn(SERVER_SOFTWARE_VAR)).unwrap_or_default();
        is_managed_platform(&marker).then(|| PlatformDetection {
            detected_via: marker,
        })
    }
}

/// Convert an env lookup into the value it carries, if the variable is set.
///
/// Non-unicode values are present: invalid sequences become U+FFFD.
pub fn present_value(lookup: Result<String, VarError>) -> Option<String> {
    match lookup {
        Ok(value) => Some(value),
        Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        Err(VarError::NotPresent) => None,
    }
}

/// Check a platform marker against the managed platform prefix.
///
/// Matching is a case-sensitive prefix test.
pub fn is_managed_platform(marker: &str) -> bool {
    marker.starts_with(MANAGED_PLATFORM_PREFIX)
}
