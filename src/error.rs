//! Error types for deployenv operations.
//!
//! Environment resolution itself never fails: absent inputs map to
//! documented defaults. [`DeployEnvError`] only covers the I/O edges of the
//! crate (reading snapshot env files, rendering output).
//!
//! # Error Handling Strategy
//!
//! - Use `DeployEnvError` for failures callers may want to match on
//! - Use `anyhow::Error` (via `DeployEnvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deployenv operations.
#[derive(Debug, Error)]
pub enum DeployEnvError {
    /// A snapshot env file could not be read.
    #[error("Failed to read env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    /// Settings or manifest could not be rendered.
    #[error("Failed to render {format}: {message}")]
    Serialization {
        format: &'static str,
        message: String,
    },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for DeployEnvError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "json",
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeployEnvError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "yaml",
            message: err.to_string(),
        }
    }
}

/// Result type alias for deployenv operations.
pub type Result<T> = std::result::Result<T, DeployEnvError>;
