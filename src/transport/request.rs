//! Wire-level request and response values, and the [`HttpClient`] seam.

use super::HttpError;

/// One outgoing log entry request.
///
/// Built by the client with the JSON payload already serialized, so an
/// [`HttpClient`] only has to put these bytes on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Method from the client options
    pub method: http::Method,
    /// Fully resolved endpoint URL
    pub url: url::Url,
    /// Content-Type, Authorization and Content-Length
    pub headers: http::HeaderMap,
    /// Serialized payload
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Starts a request with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Attaches a body as-is, leaving headers untouched.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header. A header of the same name is replaced, never repeated.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attaches a body together with its byte length as `Content-Length`.
    #[must_use]
    pub fn with_sized_body(self, body: Vec<u8>) -> Self {
        let length = http::HeaderValue::from(body.len());
        self.with_header(http::header::CONTENT_LENGTH, length)
            .with_body(body)
    }

    /// Payload size in bytes.
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.as_ref().map_or(0, Vec::len)
    }
}

/// What the service answered: a status and the whole body.
///
/// The body is read to the end before this value exists.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status line code
    pub status: http::StatusCode,
    /// Complete body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Wraps a status and a fully read body.
    #[must_use]
    pub fn new(status: http::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body as text, or `None` if it is not UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends one [`HttpRequest`] and hands back the buffered answer.
///
/// [`ReqwestClient`](super::ReqwestClient) is the production implementation;
/// tests substitute recording mocks. A call performs exactly one exchange
/// and never retries.
///
/// ```ignore
/// use everylog::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Accepting;
///
/// impl HttpClient for Accepting {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::CREATED, "{}"))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Performs the exchange.
    ///
    /// A non-2xx status is still `Ok`; status mapping happens in
    /// [`interpret`](super::interpret).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only when no response arrived.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
