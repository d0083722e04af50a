//! TOML configuration for the probe tool.
//!
//! The file is optional. When no `--config` path is given the probe looks for
//! [`DEFAULT_CONFIG_FILE`] in the working directory and silently falls back to
//! defaults if it is not there. An explicit path that cannot be read is an
//! error.
//!
//! ```toml
//! platform = "linux"   # default platform for `native` lookups
//! log_level = "info"   # used when RUST_LOG is not set
//! ```
//!
//! # Serde default values
//!
//! The struct carries `#[serde(default)]`, so every field absent from the file
//! takes its value from [`ProbeConfig::default()`].  An empty file is a valid
//! configuration.

use std::path::{Path, PathBuf};

use keycode_core::Platform;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "keycode-probe.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Probe settings read from disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Platform used by `native` when `--platform` is not given.
    pub platform: Platform,
    /// `tracing` filter used when `RUST_LOG` is unset, e.g. `"debug"`.
    pub log_level: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            platform: host_platform(),
            log_level: "info".to_string(),
        }
    }
}

/// The platform this binary was compiled for; Linux for anything else.
pub fn host_platform() -> Platform {
    if cfg!(target_os = "macos") {
        Platform::MacOs
    } else if cfg!(target_os = "windows") {
        Platform::Windows
    } else {
        Platform::Linux
    }
}

/// Parses configuration text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or names an
/// unknown platform.
pub fn parse_config(text: &str) -> Result<ProbeConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Loads the configuration.
///
/// With `Some(path)` the file must exist. With `None` the default file is
/// tried and a missing file yields [`ProbeConfig::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for unreadable files (including a missing
/// explicit path) and [`ConfigError::Parse`] for malformed TOML.
pub fn load_config(path: Option<&Path>) -> Result<ProbeConfig, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(ProbeConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
