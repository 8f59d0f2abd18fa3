//! Error types for client construction and notification.

use thiserror::Error;

use crate::entry::ValidationError;

/// Invalid client settings, reported at construction time.
///
/// Construction aborts on the first failing check; no partially built
/// client exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The api key is empty.
    #[error("Api Key required")]
    ApiKeyRequired,

    /// The api key is not exactly 36 characters or cannot be sent as a header.
    #[error("invalid api key")]
    InvalidApiKey,

    /// The project id is empty.
    #[error("projectId required")]
    ProjectIdRequired,

    /// The project id is longer than 20 characters.
    #[error("invalid projectId")]
    InvalidProjectId,

    /// Hostname, port, path or method do not form a usable endpoint.
    #[error("invalid endpoint: {reason}")]
    InvalidEndpoint {
        /// Reason for invalidity
        reason: String,
    },
}

impl ConfigError {
    /// Creates an `InvalidEndpoint` error.
    #[must_use]
    pub fn endpoint(reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            reason: reason.into(),
        }
    }
}

/// Failure outcome of any client operation.
///
/// Each kind carries its own payload; callers dispatch with `match`.
///
/// # Example
///
/// ```
/// use everylog::EverylogError;
///
/// fn describe(error: &EverylogError) -> String {
///     match error {
///         EverylogError::Config(e) => format!("bad settings: {e}"),
///         EverylogError::Validation(e) => format!("bad entry: {e}"),
///         EverylogError::Notification { message, status } => {
///             format!("rejected ({status}): {message}")
///         }
///         EverylogError::Generic { message, .. } => format!("transport: {message}"),
///     }
/// }
///
/// let error = EverylogError::generic("ECONNRESET");
/// assert_eq!(describe(&error), "transport: ECONNRESET");
/// ```
#[derive(Debug, Error)]
pub enum EverylogError {
    /// Invalid api key, project id or endpoint.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log entry failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Notification {
        /// Message supplied by the service
        message: String,
        /// Status code of the response
        status: http::StatusCode,
    },

    /// No response was obtained (DNS, refused or reset connection, timeout).
    #[error("{message}")]
    Generic {
        /// Underlying transport error text
        message: String,
        /// Always 500
        status: http::StatusCode,
    },
}

impl EverylogError {
    /// Creates a `Generic` error with status 500.
    #[must_use]
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
            status: http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the status code carried by the error, if any.
    ///
    /// Only `Notification` and `Generic` carry one.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Notification { status, .. } | Self::Generic { status, .. } => Some(*status),
            Self::Config(_) | Self::Validation(_) => None,
        }
    }

    /// Returns true if the failure happened before any network I/O.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Validation(_))
    }
}
