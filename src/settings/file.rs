//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::SettingsError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Account credentials section
    #[serde(default)]
    pub account: AccountSection,

    /// Endpoint configuration section
    #[serde(default)]
    pub endpoint: EndpointSection,

    /// Default entry fields
    #[serde(default)]
    pub entry: EntrySection,
}

/// Account credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSection {
    /// Api key (36 characters)
    pub api_key: Option<String>,

    /// Project id (at most 20 characters)
    pub project_id: Option<String>,
}

/// Endpoint configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointSection {
    /// Protocol: "http" or "https"
    pub protocol: Option<String>,

    /// Service hostname
    pub hostname: Option<String>,

    /// Service port
    pub port: Option<u16>,

    /// Endpoint path
    pub path: Option<String>,

    /// HTTP method (default: POST)
    pub method: Option<String>,

    /// Use plain HTTP against a local mock server
    #[serde(default)]
    pub local_testing: bool,

    /// Treat 401 responses as success
    #[serde(default)]
    pub unauthorized_is_success: bool,
}

/// Default entry fields, applied when neither the CLI nor the entry file
/// sets them.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntrySection {
    /// Default icon
    pub icon: Option<String>,

    /// Default push flag
    pub push: Option<bool>,

    /// Default tags
    pub tags: Option<Vec<String>>,

    /// Default groups
    pub groups: Option<Vec<String>>,

    /// Default external channels
    pub external_channels: Option<Vec<String>>,
}

impl SettingsFile {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(SettingsError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Everylog Configuration File

[account]
# Api key (required, 36 characters)
# api_key = "00000000-0000-0000-0000-000000000000"

# Project id (required, at most 20 characters)
# project_id = "my-project"

[endpoint]
# Protocol: "http" or "https" (default: https)
# protocol = "https"

# Service hostname (default: api.everylog.io)
# hostname = "api.everylog.io"

# Service port (default: 443 for https, 80 for http)
# port = 443

# Endpoint path (default: /api/v1/log-entries)
# path = "/api/v1/log-entries"

# HTTP method (default: POST, can be overridden by --method CLI flag)
# method = "POST"

# Use plain HTTP against a local mock server
# local_testing = false

# Treat 401 responses as success (legacy service versions only)
# unauthorized_is_success = false

[entry]
# Defaults applied when the CLI and the entry file leave a field unset.
# Note: CLI lists REPLACE these entirely (not merged)
# icon = "📝"
# push = false
# tags = ["cli"]
# groups = ["ops"]
# external_channels = ["slack"]
"#
    .to_string()
}
