//! Error types for the settings crate.
//!
//! Record-level problems in the definition files never surface here; they are
//! recovered inside the parsed grids. What remains is file I/O and the
//! application configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading definition files or configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A definition or config file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Default definitions could not be written.
    #[error("Failed to write default definitions to {}: {source}", .path.display())]
    WriteDefaults { path: PathBuf, source: io::Error },

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
