//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Everylog: submit a log entry to the Everylog service
///
/// Builds one log entry from flags (or a JSON file), validates it and
/// sends it with a single request.
#[derive(Debug, Parser)]
#[command(name = "everylog")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Account api key (36 characters)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Project the entry is filed under (at most 20 characters)
    #[arg(long = "project-id")]
    pub project_id: Option<String>,

    /// Entry title (at most 50 characters)
    #[arg(long, short)]
    pub title: Option<String>,

    /// Entry summary (at most 100 characters)
    #[arg(long, short)]
    pub summary: Option<String>,

    /// Entry body
    #[arg(long, short)]
    pub body: Option<String>,

    /// External http/https link
    #[arg(long)]
    pub link: Option<String>,

    /// Request a push notification
    #[arg(long, conflicts_with = "no_push")]
    pub push: bool,

    /// Explicitly disable push notification
    #[arg(long = "no-push")]
    pub no_push: bool,

    /// Tag for filtering (can be specified multiple times)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Group to notify (can be specified multiple times)
    #[arg(long = "group", value_name = "GROUP")]
    pub groups: Vec<String>,

    /// External channel to forward to (can be specified multiple times)
    #[arg(long = "channel", value_name = "CHANNEL")]
    pub channels: Vec<String>,

    /// Icon, usually an emoji
    #[arg(long)]
    pub icon: Option<String>,

    /// Property in 'key=value' format; the value is parsed as JSON when
    /// possible (can be specified multiple times)
    #[arg(long = "property", value_name = "K=V")]
    pub properties: Vec<String>,

    /// JSON file holding the entry; other entry flags override its fields
    #[arg(long, value_name = "FILE")]
    pub entry: Option<PathBuf>,

    /// Protocol: http or https
    #[arg(long)]
    pub protocol: Option<String>,

    /// Service hostname
    #[arg(long)]
    pub hostname: Option<String>,

    /// Service port
    #[arg(long)]
    pub port: Option<u16>,

    /// Endpoint path
    #[arg(long)]
    pub path: Option<String>,

    /// HTTP method
    #[arg(long)]
    pub method: Option<String>,

    /// Use plain HTTP against a local mock server
    #[arg(long = "local-testing")]
    pub local_testing: bool,

    /// Treat 401 responses as success (legacy service versions)
    #[arg(long = "unauthorized-is-success")]
    pub unauthorized_is_success: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for everylog
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "everylog.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the push flag as given on the command line, if any.
    #[must_use]
    pub const fn push_flag(&self) -> Option<bool> {
        if self.push {
            Some(true)
        } else if self.no_push {
            Some(false)
        } else {
            None
        }
    }
}
