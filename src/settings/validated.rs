//! Validated settings after merging CLI and TOML sources.
//!
//! This module contains the final settings used by the binary. Endpoint
//! settings are checked here; credentials and the entry itself are
//! checked by the client when it is built and used.

use std::fmt;
use std::path::{Path, PathBuf};

use http::Method;
use serde_json::Value;

use crate::client::{ClientOptions, defaults};
use crate::entry::LogEntry;

use super::cli::Cli;
use super::error::{SettingsError, field};
use super::file::{EntrySection, SettingsFile};

/// Fully resolved settings ready for use by the binary.
///
/// # Construction
///
/// Use [`ValidatedSettings::from_raw`] to create from CLI args and an
/// optional settings file, or [`ValidatedSettings::load`] to also locate
/// and read the file.
#[derive(Debug)]
pub struct ValidatedSettings {
    /// Account api key (required)
    pub api_key: String,

    /// Project id (required)
    pub project_id: String,

    /// Endpoint options
    pub options: ClientOptions,

    /// The entry to send, not yet validated
    pub entry: LogEntry,

    /// Print the request body instead of sending it
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoint = self
            .options
            .endpoint_url()
            .map_or_else(|_| self.options.hostname.clone(), |url| url.to_string());

        write!(
            f,
            "Settings {{ project_id: {}, endpoint: {}, method: {}, local_testing: {}, dry_run: {} }}",
            self.project_id, endpoint, self.options.method, self.options.local_testing, self.dry_run,
        )
    }
}

impl ValidatedSettings {
    /// Creates validated settings from CLI arguments and an optional settings file.
    ///
    /// CLI arguments take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`api_key`, `project_id`)
    /// - Protocol, method, hostname, port or path are invalid
    /// - A property is not in `key=value` form
    /// - The entry file cannot be read, parsed or validated
    pub fn from_raw(cli: &Cli, file: Option<&SettingsFile>) -> Result<Self, SettingsError> {
        let api_key = Self::resolve_api_key(cli, file)?;
        let project_id = Self::resolve_project_id(cli, file)?;
        let options = Self::resolve_options(cli, file)?;
        let entry = Self::resolve_entry(cli, file)?;

        Ok(Self {
            api_key,
            project_id,
            options,
            entry,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges settings from CLI and the config file.
    ///
    /// Reads `cli.config` if set (a leading `~/` expands to the home
    /// directory). Otherwise reads the default config file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged settings are invalid
    pub fn load(cli: &Cli) -> Result<Self, SettingsError> {
        let file = match cli.config.as_deref() {
            Some(path) => Some(SettingsFile::load(&expand_tilde(path))?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(SettingsFile::load(&path)?),
                _ => None,
            },
        };

        Self::from_raw(cli, file.as_ref())
    }

    fn resolve_api_key(cli: &Cli, file: Option<&SettingsFile>) -> Result<String, SettingsError> {
        cli.api_key
            .as_deref()
            .or_else(|| file.and_then(|f| f.account.api_key.as_deref()))
            .map(ToString::to_string)
            .ok_or_else(|| {
                SettingsError::missing(
                    field::API_KEY,
                    "Use --api-key or set account.api_key in config file",
                )
            })
    }

    fn resolve_project_id(cli: &Cli, file: Option<&SettingsFile>) -> Result<String, SettingsError> {
        cli.project_id
            .as_deref()
            .or_else(|| file.and_then(|f| f.account.project_id.as_deref()))
            .map(ToString::to_string)
            .ok_or_else(|| {
                SettingsError::missing(
                    field::PROJECT_ID,
                    "Use --project-id or set account.project_id in config file",
                )
            })
    }

    fn resolve_options(
        cli: &Cli,
        file: Option<&SettingsFile>,
    ) -> Result<ClientOptions, SettingsError> {
        let endpoint = file.map(|f| &f.endpoint);
        let mut options = ClientOptions::new();

        // Priority: CLI explicit > TOML > default
        if let Some(protocol) = cli
            .protocol
            .as_deref()
            .or_else(|| endpoint.and_then(|e| e.protocol.as_deref()))
        {
            options.protocol = protocol.parse()?;
        }

        if let Some(hostname) = cli
            .hostname
            .as_deref()
            .or_else(|| endpoint.and_then(|e| e.hostname.as_deref()))
        {
            options.hostname = hostname.to_string();
        }

        options.port = cli.port.or_else(|| endpoint.and_then(|e| e.port));

        if let Some(path) = cli
            .path
            .as_deref()
            .or_else(|| endpoint.and_then(|e| e.path.as_deref()))
        {
            options.path = path.to_string();
        }

        options.method = Self::resolve_method(cli, file)?;

        // Flags only enable, never disable
        options.local_testing = cli.local_testing || endpoint.is_some_and(|e| e.local_testing);
        options.unauthorized_is_success =
            cli.unauthorized_is_success || endpoint.is_some_and(|e| e.unauthorized_is_success);

        options.endpoint_url()?;

        Ok(options)
    }

    fn resolve_method(cli: &Cli, file: Option<&SettingsFile>) -> Result<Method, SettingsError> {
        let Some(method_str) = cli
            .method
            .as_deref()
            .or_else(|| file.and_then(|f| f.endpoint.method.as_deref()))
        else {
            return Ok(defaults::METHOD);
        };

        method_str
            .to_ascii_uppercase()
            .parse::<Method>()
            .map_err(|_| SettingsError::InvalidMethod(method_str.to_string()))
    }

    fn resolve_entry(cli: &Cli, file: Option<&SettingsFile>) -> Result<LogEntry, SettingsError> {
        let mut entry = match cli.entry.as_deref() {
            Some(path) => load_entry_file(path)?,
            None => LogEntry::default(),
        };

        if let Some(title) = &cli.title {
            entry.title.clone_from(title);
        }
        if let Some(summary) = &cli.summary {
            entry.summary.clone_from(summary);
        }
        if let Some(body) = &cli.body {
            entry.body.clone_from(body);
        }
        if cli.link.is_some() {
            entry.link.clone_from(&cli.link);
        }
        if let Some(push) = cli.push_flag() {
            entry.push = Some(push);
        }

        // CLI lists replace file lists entirely
        if !cli.tags.is_empty() {
            entry.tags = Some(cli.tags.clone());
        }
        if !cli.groups.is_empty() {
            entry.groups = Some(cli.groups.clone());
        }
        if !cli.channels.is_empty() {
            entry.external_channels = Some(cli.channels.clone());
        }
        if cli.icon.is_some() {
            entry.icon.clone_from(&cli.icon);
        }

        for property in &cli.properties {
            let (key, value) = parse_property(property)?;
            entry = entry.with_property(key, value);
        }

        if let Some(file) = file {
            apply_entry_defaults(&mut entry, &file.entry);
        }

        Ok(entry)
    }
}

/// Writes the default configuration template to the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), SettingsError> {
    let template = super::file::default_config_template();
    std::fs::write(path, template).map_err(|e| SettingsError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns the config file read when `--config` is not given.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("everylog").join("config.toml"))
}

// Helper functions

fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

fn load_entry_file(path: &Path) -> Result<LogEntry, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::EntryRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| SettingsError::EntryParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    LogEntry::from_value(&value).map_err(|e| SettingsError::EntryInvalid {
        path: path.to_path_buf(),
        source: e,
    })
}

fn apply_entry_defaults(entry: &mut LogEntry, defaults: &EntrySection) {
    if entry.icon.is_none() {
        entry.icon.clone_from(&defaults.icon);
    }
    if entry.push.is_none() {
        entry.push = defaults.push;
    }
    if entry.tags.is_none() {
        entry.tags.clone_from(&defaults.tags);
    }
    if entry.groups.is_none() {
        entry.groups.clone_from(&defaults.groups);
    }
    if entry.external_channels.is_none() {
        entry.external_channels.clone_from(&defaults.external_channels);
    }
}

/// Parses `key=value`. The value is JSON when it parses as JSON, else a string.
fn parse_property(s: &str) -> Result<(String, Value), SettingsError> {
    let invalid = || SettingsError::InvalidProperty {
        value: s.to_string(),
    };

    let (key, raw) = s.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid());
    }

    let raw = raw.trim();
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    Ok((key.to_string(), value))
}
