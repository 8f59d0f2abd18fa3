//! Transport layer for sending log entries over HTTP.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Mapping responses to results ([`interpret`], [`NotifyResponse`])

mod client;
mod error;
mod request;
mod response;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use response::{NotifyResponse, interpret, transport_failure};
