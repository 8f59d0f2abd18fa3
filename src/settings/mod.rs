//! Settings layer for the `everylog` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`SettingsFile`])
//! - Validated settings ([`ValidatedSettings`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (`--config`, else the default path if present)
//! 3. **Built-in defaults** ([`crate::client::defaults`])
//!
//! `api_key` and `project_id` have no defaults and must come from the CLI
//! or the file.
//!
//! # Entry Fields
//!
//! The entry starts from `--entry <file.json>` when given. Individual
//! flags override its fields; `--tag`, `--group` and `--channel` replace
//! lists entirely. The `[entry]` section of the config file only fills
//! fields that are still unset.
//!
//! # Boolean Flag Semantics
//!
//! `--local-testing` and `--unauthorized-is-success` use OR semantics:
//! set `true` in either source and the result is `true`.

mod cli;
mod error;
mod file;
mod validated;

#[cfg(test)]
mod file_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{SettingsError, field};
pub use file::{SettingsFile, default_config_template};
pub use validated::{ValidatedSettings, default_config_path, write_default_config};
