//! Everylog client
//!
//! A library for submitting structured log entries to the Everylog
//! service. Entries are validated, serialized to JSON and sent with a
//! single HTTP request; failures come back as [`EverylogError`].
//!
//! ```no_run
//! use everylog::{EverylogClient, EverylogError, LogEntry};
//!
//! # async fn example() -> Result<(), EverylogError> {
//! let client = EverylogClient::new("0f3c9a4e-7b1d-4c2e-9f6a-2d8e5b7c1a90", "my-project")?;
//! let entry = LogEntry::new("Backup done", "Nightly backup finished", "42 files copied");
//!
//! match client.notify(&entry).await {
//!     Ok(response) => println!("stored ({})", response.status),
//!     Err(EverylogError::Notification { message, status }) => {
//!         eprintln!("rejected with {status}: {message}");
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod entry;
pub mod settings;
pub mod transport;

pub use client::{ClientOptions, ConfigError, EverylogClient, EverylogError, Protocol};
pub use entry::{LogEntry, ValidationError};
pub use transport::NotifyResponse;
