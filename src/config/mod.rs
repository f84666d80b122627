//! Process configuration resolved from the host environment.
//!
//! - Resolved settings in [`settings`]
//! - The client asset manifest in [`manifest`]
//! - Offline env snapshots in [`env_file`]
//!
//! # Example
//!
//! ```
//! use deployenv::config::{Settings, DEFAULT_QUERY_LIMIT};
//!
//! let settings = Settings::resolve_with_env(|_| Err(std::env::VarError::NotPresent));
//! assert!(settings.is_development());
//! assert_eq!(settings.current_version_id(), None);
//! assert_eq!(settings.default_query_limit(), DEFAULT_QUERY_LIMIT);
//! ```

pub mod env_file;
pub mod manifest;
pub mod settings;

pub use env_file::EnvFileParser;
pub use manifest::{AssetEntry, AssetKind, AssetManifest, CLIENT_ASSET_MANIFEST};
pub use settings::{global, init, Settings, CURRENT_VERSION_ID_VAR, DEFAULT_QUERY_LIMIT};
