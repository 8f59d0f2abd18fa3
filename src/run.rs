//! Application execution logic.
//!
//! Builds the client from validated settings and submits the entry, or
//! renders the request body when dry-run mode is enabled.

use everylog::settings::ValidatedSettings;
use everylog::transport::HttpClient;
use everylog::{EverylogClient, EverylogError, LogEntry};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Executes one submission and returns the text to print on stdout.
///
/// # Errors
///
/// Returns an error if:
/// - The credentials or endpoint are rejected by the client
/// - The entry fails validation
/// - The service rejects the entry, or no response was obtained
///
/// # Coverage Note
///
/// This function is excluded from coverage because it builds a real
/// network client.
#[cfg(not(tarpaulin_include))]
pub async fn execute(settings: ValidatedSettings) -> Result<String, EverylogError> {
    let client =
        EverylogClient::with_options(&settings.api_key, settings.project_id, settings.options)?;

    tracing::debug!("Using {client:?}");

    submit(&client, &settings.entry, settings.dry_run).await
}

/// Sends `entry` through `client`, or serializes it when `dry_run` is set.
async fn submit<H: HttpClient>(
    client: &EverylogClient<H>,
    entry: &LogEntry,
    dry_run: bool,
) -> Result<String, EverylogError> {
    if dry_run {
        tracing::info!("Dry-run mode enabled - the entry will not be sent");
        let payload = client.payload(entry)?;
        return Ok(String::from_utf8_lossy(&payload).into_owned());
    }

    let response = client.notify(entry).await?;
    tracing::info!("Log entry stored (status {})", response.status);

    Ok(response.body.to_string())
}
