//! Default values for client options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default service hostname.
pub const HOSTNAME: &str = "api.everylog.io";

/// Default path of the log entries endpoint.
pub const PATH: &str = "/api/v1/log-entries";

/// Default HTTP method.
pub const METHOD: http::Method = http::Method::POST;

/// Default port for HTTPS.
pub const HTTPS_PORT: u16 = 443;

/// Default port for plain HTTP.
pub const HTTP_PORT: u16 = 80;
