//! Validation errors for log entries.

use thiserror::Error;

/// Error type for log entry validation.
///
/// One variant per rule; the message names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title is missing or empty.
    #[error("title required")]
    TitleRequired,

    /// The title is not a string or longer than 50 characters.
    #[error("invalid title")]
    InvalidTitle,

    /// The summary is missing or empty.
    #[error("summary required")]
    SummaryRequired,

    /// The summary is not a string or longer than 100 characters.
    #[error("invalid summary")]
    InvalidSummary,

    /// The body is missing or empty.
    #[error("body required")]
    BodyRequired,

    /// The body is not a string.
    #[error("invalid body")]
    InvalidBody,

    /// `push` is present but not a boolean.
    #[error("invalid push")]
    InvalidPush,

    /// `link` is not an `http` or `https` URL.
    #[error("link is not a valid url")]
    InvalidLink,

    /// A list field is present but not an array.
    #[error("{field} is not an array")]
    NotAnArray {
        /// Name of the list field
        field: &'static str,
    },

    /// A list field contains a non-string element.
    #[error("invalid array element in {field}")]
    InvalidArrayElement {
        /// Name of the list field
        field: &'static str,
        /// Position of the first offending element
        index: usize,
    },

    /// `icon` is present but not a string.
    #[error("invalid icon")]
    InvalidIcon,

    /// `properties` is present but not a mapping.
    #[error("invalid properties type")]
    InvalidProperties,

    /// A dynamic entry is not a JSON object.
    #[error("log entry must be a JSON object")]
    NotAnObject,

    /// A dynamic entry contains a key that is not a log entry field.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// The unrecognized key
        name: String,
    },
}

/// Wire names of log entry fields, as used in payloads and messages.
pub mod field {
    /// The title field.
    pub const TITLE: &str = "title";
    /// The summary field.
    pub const SUMMARY: &str = "summary";
    /// The body field.
    pub const BODY: &str = "body";
    /// The link field.
    pub const LINK: &str = "link";
    /// The push flag.
    pub const PUSH: &str = "push";
    /// The tags list.
    pub const TAGS: &str = "tags";
    /// The groups list.
    pub const GROUPS: &str = "groups";
    /// The external channels list.
    pub const EXTERNAL_CHANNELS: &str = "externalChannels";
    /// The icon field.
    pub const ICON: &str = "icon";
    /// The properties mapping.
    pub const PROPERTIES: &str = "properties";

    /// Every field a log entry accepts, in payload order.
    pub const ALL: [&str; 10] = [
        TITLE,
        SUMMARY,
        BODY,
        LINK,
        PUSH,
        TAGS,
        GROUPS,
        EXTERNAL_CHANNELS,
        ICON,
        PROPERTIES,
    ];
}
