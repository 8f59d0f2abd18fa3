//! [`HttpClient`] backed by reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Sends log entry requests through a `reqwest::Client`.
///
/// The default client has no deadline, so a call waits as long as the
/// connection does. To bound it, configure a `reqwest::Client` and wrap it
/// with [`ReqwestClient::from_client`].
///
/// ```no_run
/// use std::time::Duration;
///
/// use everylog::transport::ReqwestClient;
/// use everylog::{ClientOptions, EverylogClient};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let inner = reqwest::Client::builder().timeout(Duration::from_secs(5)).build()?;
/// let client = EverylogClient::with_http_client(
///     ReqwestClient::from_client(inner),
///     "0f3c9a4e-7b1d-4c2e-9f6a-2d8e5b7c1a90",
///     "my-project",
///     ClientOptions::default(),
/// )?;
/// # drop(client);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Wraps a fresh `reqwest::Client` with reqwest's defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a caller-configured `reqwest::Client` (timeouts, proxies, TLS).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = req;

        let mut outgoing = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            outgoing = outgoing.body(body);
        }

        let response = outgoing.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
