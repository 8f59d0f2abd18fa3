//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Every variant means no HTTP response was obtained. A response with a
/// non-success status is not an `HttpError`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// connection reset and other socket-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Only produced when the underlying client was configured with a
    /// deadline; the library itself sets none.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Returns the text of the root cause, without the variant prefix.
    ///
    /// HTTP clients wrap socket errors in several layers ("error sending
    /// request" around "tcp connect error" around the OS error). The
    /// innermost error is the one that says what went wrong, e.g.
    /// "Connection refused (os error 111)" or "ECONNRESET".
    #[must_use]
    pub fn transport_message(&self) -> String {
        match self {
            Self::Connection(source) => root_cause(&**source).to_string(),
            Self::Timeout => self.to_string(),
            Self::InvalidUrl(reason) => reason.clone(),
        }
    }
}

fn root_cause<'a>(error: &'a (dyn std::error::Error + 'static)) -> &'a (dyn std::error::Error + 'static) {
    let mut cause = error;
    while let Some(inner) = cause.source() {
        cause = inner;
    }
    cause
}
