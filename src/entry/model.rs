//! The log entry submitted to the service.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::ValidationError;
use super::validate::{validate_entry, validate_value};

/// A structured log entry.
///
/// `title`, `summary` and `body` are required. Every other field is
/// optional; `None` means the field is left out of the payload entirely,
/// while `Some(false)` or `Some(vec![])` are sent as given.
///
/// # Example
///
/// ```
/// use everylog::LogEntry;
///
/// let entry = LogEntry::new("Deploy finished", "api v2.3 is live", "All checks passed.")
///     .with_push(true)
///     .with_tags(["deploy", "api"])
///     .with_property("version", "2.3.0");
///
/// assert!(entry.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LogEntry {
    /// Title, 1 to 50 characters
    pub title: String,
    /// Short summary, 1 to 100 characters
    pub summary: String,
    /// Full body, non-empty
    pub body: String,
    /// External `http`/`https` URL
    #[serde(default)]
    pub link: Option<String>,
    /// Whether to send a push notification
    #[serde(default)]
    pub push: Option<bool>,
    /// Tags for filtering entries
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Groups to notify
    #[serde(default)]
    pub groups: Option<Vec<String>>,
    /// External channels to forward the entry to
    #[serde(default)]
    pub external_channels: Option<Vec<String>>,
    /// Icon (usually an emoji)
    #[serde(default)]
    pub icon: Option<String>,
    /// Arbitrary key/value properties
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl LogEntry {
    /// Creates an entry with the required fields and no optional fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Builds an entry from an arbitrary JSON value.
    ///
    /// All type rules are checked on the raw value first, so a wrong type
    /// is reported with the same error a typed entry would get for the
    /// corresponding rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        validate_value(value)?;
        Self::deserialize(value).map_err(|_| ValidationError::NotAnObject)
    }

    /// Checks the entry against the validation rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_entry(self)
    }

    /// Sets the link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Sets the push flag.
    #[must_use]
    pub const fn with_push(mut self, push: bool) -> Self {
        self.push = Some(push);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the groups.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the external channels.
    #[must_use]
    pub fn with_external_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external_channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Replaces the properties mapping.
    #[must_use]
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Adds one property, creating the mapping if needed.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}
