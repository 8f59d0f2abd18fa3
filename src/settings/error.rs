//! Error types for settings parsing and resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::client::ConfigError;
use crate::entry::ValidationError;

/// Error type for settings operations.
///
/// Covers errors from reading files, parsing TOML or JSON, and merging
/// CLI arguments with the config file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid HTTP method.
    #[error("Invalid HTTP method '{0}'")]
    InvalidMethod(String),

    /// Invalid endpoint or credential setting.
    #[error(transparent)]
    Client(#[from] ConfigError),

    /// Invalid property format.
    #[error("Invalid property format '{value}': expected 'key=value'")]
    InvalidProperty {
        /// The invalid property string
        value: String,
    },

    /// Failed to read the entry file.
    #[error("Failed to read entry file '{}': {source}", path.display())]
    EntryRead {
        /// Path to the entry file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The entry file is not valid JSON.
    #[error("Failed to parse entry file '{}': {source}", path.display())]
    EntryParse {
        /// Path to the entry file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The entry file does not describe a valid log entry.
    #[error("Invalid entry file '{}': {source}", path.display())]
    EntryInvalid {
        /// Path to the entry file
        path: PathBuf,
        /// The first failing rule
        #[source]
        source: ValidationError,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The api key field.
    pub const API_KEY: &str = "api_key";
    /// The project id field.
    pub const PROJECT_ID: &str = "project_id";
}

impl SettingsError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
