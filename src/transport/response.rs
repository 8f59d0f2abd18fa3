//! Mapping of HTTP outcomes to notification results.

use serde_json::Value;

use crate::client::EverylogError;

use super::{HttpError, HttpResponse};

/// Successful outcome of a notification.
///
/// Carries the status code returned by the service together with the
/// parsed response body, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyResponse {
    /// HTTP status code (2xx, or 401 in compatibility mode)
    pub status: http::StatusCode,
    /// Parsed JSON response body
    pub body: Value,
}

impl NotifyResponse {
    /// Returns the numeric status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

/// Interprets a fully buffered response.
///
/// A 2xx status (and 401 when `unauthorized_is_success` is set) yields a
/// [`NotifyResponse`]. Anything else becomes
/// [`EverylogError::Notification`] with the service-supplied `message`.
///
/// # Errors
///
/// Returns [`EverylogError::Notification`] for a non-success status.
pub fn interpret(
    response: HttpResponse,
    unauthorized_is_success: bool,
) -> Result<NotifyResponse, EverylogError> {
    let status = response.status;
    let accepted = status.is_success()
        || (unauthorized_is_success && status == http::StatusCode::UNAUTHORIZED);

    if accepted {
        return Ok(NotifyResponse {
            status,
            body: parse_body(&response),
        });
    }

    Err(EverylogError::Notification {
        message: rejection_message(&response),
        status,
    })
}

/// Converts a transport failure into [`EverylogError::Generic`].
#[must_use]
pub fn transport_failure(error: &HttpError) -> EverylogError {
    EverylogError::generic(error.transport_message())
}

/// Parses a success body.
///
/// Empty bodies are `null`. Bodies that are not JSON are kept verbatim as
/// a JSON string.
fn parse_body(response: &HttpResponse) -> Value {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(&response.body).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&response.body).into_owned())
    })
}

/// Extracts the rejection message.
///
/// Prefers the JSON `message` field, then the raw body text, then the
/// canonical reason phrase of the status.
fn rejection_message(response: &HttpResponse) -> String {
    let from_json = serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|value| match value.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        });

    if let Some(message) = from_json {
        return message;
    }

    match response.body_text().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => response
            .status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}
