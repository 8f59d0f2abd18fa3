//! JSON request body for a log entry.

use serde::Serialize;
use serde_json::{Map, Value};

use super::LogEntry;

/// The request body sent to the service.
///
/// Field order is fixed: projectId, title, summary, body, link, push,
/// tags, groups, externalChannels, icon, properties. Optional fields are
/// skipped only when absent; `Some(false)` and empty lists are sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload<'a> {
    project_id: &'a str,
    title: &'a str,
    summary: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_channels: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    /// Borrows the entry fields for serialization.
    #[must_use]
    pub fn new(project_id: &'a str, entry: &'a LogEntry) -> Self {
        Self {
            project_id,
            title: &entry.title,
            summary: &entry.summary,
            body: &entry.body,
            link: entry.link.as_deref(),
            push: entry.push,
            tags: entry.tags.as_deref(),
            groups: entry.groups.as_deref(),
            external_channels: entry.external_channels.as_deref(),
            icon: entry.icon.as_deref(),
            properties: entry.properties.as_ref(),
        }
    }

    /// Serializes the payload to JSON bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // Strings, booleans and string-keyed maps always serialize
        serde_json::to_vec(self).expect("payload serialization cannot fail")
    }
}
