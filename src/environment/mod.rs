//! Deployment environment detection and resolution.
//!
//! Determines whether the process runs in development or production. The
//! only signal is the host platform marker:
//!
//! 1. `SERVER_SOFTWARE` starting with `Google App Engine`: production
//! 2. Anything else, including unset: development

pub mod detection;
pub mod resolver;

pub use detection::{
    is_managed_platform, present_value, PlatformDetection, PlatformDetector,
    MANAGED_PLATFORM_PREFIX, SERVER_SOFTWARE_VAR,
};
pub use resolver::{DeploymentEnvironment, EnvironmentSource, ResolvedEnvironment};
