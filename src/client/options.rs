//! Endpoint options for the client.

use std::fmt;
use std::str::FromStr;

use url::Url;

use super::{ConfigError, defaults};

/// Transport scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    #[default]
    Https,
}

impl Protocol {
    /// Returns the URL scheme.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Returns the port used when none is configured.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Http => defaults::HTTP_PORT,
            Self::Https => defaults::HTTPS_PORT,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    /// Accepts `http`/`https`, with or without a trailing colon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches(':').to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ConfigError::endpoint(format!(
                "unknown protocol '{s}': expected http or https"
            ))),
        }
    }
}

/// Endpoint settings, fixed once the client is built.
///
/// # Defaults
///
/// - `protocol`: https
/// - `hostname`: `api.everylog.io`
/// - `port`: the scheme's default
/// - `path`: `/api/v1/log-entries`
/// - `method`: POST
/// - `local_testing`: false
/// - `unauthorized_is_success`: false
///
/// # Example
///
/// ```
/// use everylog::ClientOptions;
///
/// // Point at a mock server on localhost over plain HTTP
/// let options = ClientOptions::new()
///     .with_hostname("localhost")
///     .with_port(3000)
///     .with_local_testing(true);
///
/// let url = options.endpoint_url().unwrap();
/// assert_eq!(url.as_str(), "http://localhost:3000/api/v1/log-entries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Scheme used unless `local_testing` forces plain HTTP.
    pub protocol: Protocol,

    /// Service hostname.
    pub hostname: String,

    /// Port; `None` means the scheme's default.
    pub port: Option<u16>,

    /// Endpoint path, starting with `/`.
    pub path: String,

    /// HTTP method.
    pub method: http::Method,

    /// Selects plain HTTP to talk to a local mock server.
    pub local_testing: bool,

    /// Treats 401 responses as success.
    ///
    /// Matches one historical version of the service. Leave off unless
    /// talking to that version.
    pub unauthorized_is_success: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            protocol: Protocol::default(),
            hostname: defaults::HOSTNAME.to_string(),
            port: None,
            path: defaults::PATH.to_string(),
            method: defaults::METHOD,
            local_testing: false,
            unauthorized_is_success: false,
        }
    }
}

impl ClientOptions {
    /// Creates options with the production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the protocol.
    #[must_use]
    pub const fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets the hostname.
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Sets the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the endpoint path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: http::Method) -> Self {
        self.method = method;
        self
    }

    /// Enables or disables plain-HTTP local testing.
    #[must_use]
    pub const fn with_local_testing(mut self, local_testing: bool) -> Self {
        self.local_testing = local_testing;
        self
    }

    /// Enables or disables treating 401 as success.
    #[must_use]
    pub const fn with_unauthorized_is_success(mut self, enabled: bool) -> Self {
        self.unauthorized_is_success = enabled;
        self
    }

    /// Returns the protocol actually used on the wire.
    #[must_use]
    pub const fn effective_protocol(&self) -> Protocol {
        if self.local_testing {
            Protocol::Http
        } else {
            self.protocol
        }
    }

    /// Builds the endpoint URL from scheme, hostname, port and path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the hostname is empty or
    /// not a valid host, the port is zero, or the path does not start
    /// with `/` or carries a `#` fragment. A `?query` in the path is kept.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let hostname = self.hostname.trim();
        if hostname.is_empty() {
            return Err(ConfigError::endpoint("hostname is empty"));
        }
        if hostname.contains(['/', '?', '#', '@']) || hostname.contains("://") {
            return Err(ConfigError::endpoint(format!(
                "hostname '{hostname}' must not contain a scheme, path or credentials"
            )));
        }
        if !self.path.starts_with('/') {
            return Err(ConfigError::endpoint(format!(
                "path '{}' must start with '/'",
                self.path
            )));
        }
        if self.path.contains('#') {
            return Err(ConfigError::endpoint(format!(
                "path '{}' must not contain a fragment",
                self.path
            )));
        }
        if self.port == Some(0) {
            return Err(ConfigError::endpoint("port must be greater than 0"));
        }

        let protocol = self.effective_protocol();
        let mut url = Url::parse(&format!("{}://{hostname}", protocol.scheme()))
            .map_err(|e| ConfigError::endpoint(format!("hostname '{hostname}': {e}")))?;

        url.set_port(self.port)
            .map_err(|()| ConfigError::endpoint(format!("cannot set port on '{hostname}'")))?;

        // A query in the path is sent as the URL query, not percent-encoded
        match self.path.split_once('?') {
            Some((path, query)) => {
                url.set_path(path);
                url.set_query(Some(query));
            }
            None => url.set_path(&self.path),
        }

        Ok(url)
    }
}
