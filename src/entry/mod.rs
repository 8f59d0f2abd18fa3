//! Log entries: model, validation and request body.
//!
//! This module provides:
//! - The per-call input ([`LogEntry`])
//! - Validation rules ([`validate`], [`ValidationError`])
//! - The serialized request body ([`Payload`])

mod error;
mod model;
mod payload;
pub mod validate;

#[cfg(test)]
mod payload_tests;

pub use error::{ValidationError, field};
pub use model::LogEntry;
pub use payload::Payload;
