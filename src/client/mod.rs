//! Client layer: configuration, errors and the notify operation.
//!
//! This module provides:
//! - The client ([`EverylogClient`])
//! - Endpoint options ([`ClientOptions`], [`Protocol`])
//! - Error types ([`ConfigError`], [`EverylogError`])
//! - Default values ([`defaults`])

pub mod defaults;
mod error;
mod everylog;
mod options;


pub use error::{ConfigError, EverylogError};
pub use everylog::EverylogClient;
pub use options::{ClientOptions, Protocol};
