//! The Everylog client.

use std::fmt;

use http::HeaderValue;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::entry::validate::validate_credentials;
use crate::entry::{LogEntry, Payload, ValidationError};
use crate::transport::{
    HttpClient, HttpRequest, NotifyResponse, ReqwestClient, interpret, transport_failure,
};

use super::{ClientOptions, ConfigError, EverylogError};

/// Client for submitting log entries to one Everylog project.
///
/// Credentials and endpoint are validated once at construction and never
/// change afterwards. The client holds no mutable state, so a single
/// instance can serve concurrent [`notify`](Self::notify) calls.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use everylog::{EverylogClient, LogEntry};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EverylogClient::new("0f3c9a4e-7b1d-4c2e-9f6a-2d8e5b7c1a90", "my-project")?;
///
/// let entry = LogEntry::new("Deploy finished", "api v2.3 is live", "All checks passed.")
///     .with_push(true);
///
/// let response = client.notify(&entry).await?;
/// println!("{}: {}", response.status, response.body);
/// # Ok(())
/// # }
/// ```
pub struct EverylogClient<H = ReqwestClient> {
    http: H,
    project_id: String,
    authorization: HeaderValue,
    endpoint: Url,
    options: ClientOptions,
}

impl EverylogClient<ReqwestClient> {
    /// Creates a client for the production service with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the api key or project id is invalid.
    pub fn new(api_key: &str, project_id: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_options(api_key, project_id, ClientOptions::default())
    }

    /// Creates a client with custom endpoint options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the credentials or the endpoint are invalid.
    pub fn with_options(
        api_key: &str,
        project_id: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ConfigError> {
        Self::with_http_client(ReqwestClient::new(), api_key, project_id, options)
    }
}

impl<H> EverylogClient<H> {
    /// Creates a client that sends through the given HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the credentials or the endpoint are invalid.
    pub fn with_http_client(
        http: H,
        api_key: &str,
        project_id: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ConfigError> {
        let project_id = project_id.into();
        validate_credentials(api_key, &project_id)?;

        let endpoint = options.endpoint_url()?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| ConfigError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        Ok(Self {
            http,
            project_id,
            authorization,
            endpoint,
            options,
        })
    }

    /// Returns the project id entries are filed under.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the resolved endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the HTTP method used for every request.
    #[must_use]
    pub const fn method(&self) -> &http::Method {
        &self.options.method
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Returns the options the client was built with.
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Returns the JSON body that would be sent for `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the entry is invalid.
    pub fn payload(&self, entry: &LogEntry) -> Result<Vec<u8>, ValidationError> {
        entry.validate()?;
        Ok(Payload::new(&self.project_id, entry).to_bytes())
    }

    /// Builds the HTTP request for `entry` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the entry is invalid.
    pub fn build_request(&self, entry: &LogEntry) -> Result<HttpRequest, ValidationError> {
        let body = self.payload(entry)?;

        let request = HttpRequest::new(self.options.method.clone(), self.endpoint.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(AUTHORIZATION, self.authorization.clone())
            .with_sized_body(body);

        Ok(request)
    }
}

impl<H: HttpClient> EverylogClient<H> {
    /// Validates, serializes and sends one log entry.
    ///
    /// Exactly one request is made; nothing is retried. Validation happens
    /// before any network I/O.
    ///
    /// # Errors
    ///
    /// - [`EverylogError::Validation`] if the entry is invalid
    /// - [`EverylogError::Notification`] if the service rejects the entry
    /// - [`EverylogError::Generic`] if no response was obtained
    pub async fn notify(&self, entry: &LogEntry) -> Result<NotifyResponse, EverylogError> {
        let request = self.build_request(entry)?;

        tracing::debug!(
            "Sending log entry to {} {} ({} bytes)",
            request.method,
            request.url,
            request.body_len()
        );

        let response = match self.http.request(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Log entry not delivered: {e}");
                return Err(transport_failure(&e));
            }
        };

        interpret(response, self.options.unauthorized_is_success)
            .inspect(|accepted| {
                tracing::debug!("Log entry accepted with status {}", accepted.status);
            })
            .inspect_err(|e| tracing::warn!("Log entry rejected: {e}"))
    }
}

impl<H> fmt::Debug for EverylogClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EverylogClient")
            .field("project_id", &self.project_id)
            .field("endpoint", &self.endpoint.as_str())
            .field("method", &self.options.method)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}
