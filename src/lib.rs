//! deployenv - Deployment environment resolution.
//!
//! Resolves whether the process runs in development or production from
//! host-provided environment variables, derives the dependent flags and
//! defaults once, and exposes the client asset manifest read by the asset
//! bundling step.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolved settings, asset manifest and env snapshots
//! - [`environment`] - Platform detection and environment resolution
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use deployenv::config::Settings;
//!
//! let settings = Settings::resolve_with_env(|key| match key {
//!     "SERVER_SOFTWARE" => Ok("nginx".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! });
//! assert!(settings.is_development());
//! assert_eq!(settings.is_debug(), settings.is_development());
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod ui;

pub use config::Settings;
pub use error::{DeployEnvError, Result};
