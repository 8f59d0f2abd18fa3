//! Validation rules for credentials and log entries.
//!
//! Rules run in a fixed order and the first failure is reported:
//!
//! 1. api key: required, exactly 36 characters
//! 2. project id: required, at most 20 characters
//! 3. title: required, at most 50 characters
//! 4. summary: required, at most 100 characters
//! 5. body: required
//! 6. push: boolean
//! 7. link: `http` or `https` URL (empty is skipped)
//! 8. tags, groups, externalChannels: arrays of strings
//! 9. icon: string
//! 10. properties: mapping
//!
//! Lengths count Unicode scalar values. All functions are pure.

use serde_json::{Map, Value};

use crate::client::ConfigError;

use super::error::field;
use super::{LogEntry, ValidationError};

/// Required length of an api key.
pub const API_KEY_CHARS: usize = 36;

/// Maximum length of a project id.
pub const PROJECT_ID_MAX_CHARS: usize = 20;

/// Maximum length of a title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum length of a summary.
pub const SUMMARY_MAX_CHARS: usize = 100;

/// Checks the api key and project id (rules 1 and 2).
///
/// # Errors
///
/// Returns the [`ConfigError`] for the first failing rule.
pub fn validate_credentials(api_key: &str, project_id: &str) -> Result<(), ConfigError> {
    if api_key.is_empty() {
        return Err(ConfigError::ApiKeyRequired);
    }
    if api_key.chars().count() != API_KEY_CHARS {
        return Err(ConfigError::InvalidApiKey);
    }

    if project_id.is_empty() {
        return Err(ConfigError::ProjectIdRequired);
    }
    if project_id.chars().count() > PROJECT_ID_MAX_CHARS {
        return Err(ConfigError::InvalidProjectId);
    }

    Ok(())
}

/// Checks a typed entry (rules 3 to 10).
///
/// Type rules hold by construction; only presence, length and link
/// format can fail here.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first failing rule.
pub fn validate_entry(entry: &LogEntry) -> Result<(), ValidationError> {
    check_title(&entry.title)?;
    check_summary(&entry.summary)?;
    check_body(&entry.body)?;

    if let Some(link) = entry.link.as_deref() {
        check_link(link)?;
    }

    Ok(())
}

/// Checks a dynamically shaped entry (rules 3 to 10).
///
/// `null` counts as absent for optional fields. Keys that are not entry
/// fields are rejected once every rule has passed.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first failing rule.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    let Value::Object(object) = value else {
        return Err(ValidationError::NotAnObject);
    };

    let title = required_str(
        object,
        field::TITLE,
        ValidationError::TitleRequired,
        ValidationError::InvalidTitle,
    )?;
    check_title(title)?;

    let summary = required_str(
        object,
        field::SUMMARY,
        ValidationError::SummaryRequired,
        ValidationError::InvalidSummary,
    )?;
    check_summary(summary)?;

    required_str(
        object,
        field::BODY,
        ValidationError::BodyRequired,
        ValidationError::InvalidBody,
    )?;

    if optional(object, field::PUSH).is_some_and(|push| !push.is_boolean()) {
        return Err(ValidationError::InvalidPush);
    }

    if let Some(link) = optional(object, field::LINK) {
        match link {
            Value::String(link) => check_link(link)?,
            _ => return Err(ValidationError::InvalidLink),
        }
    }

    for list in [field::TAGS, field::GROUPS, field::EXTERNAL_CHANNELS] {
        if let Some(elements) = optional(object, list) {
            check_string_array(list, elements)?;
        }
    }

    if optional(object, field::ICON).is_some_and(|icon| !icon.is_string()) {
        return Err(ValidationError::InvalidIcon);
    }

    if optional(object, field::PROPERTIES).is_some_and(|properties| !properties.is_object()) {
        return Err(ValidationError::InvalidProperties);
    }

    if let Some(name) = object.keys().find(|key| !field::ALL.contains(&key.as_str())) {
        return Err(ValidationError::UnknownField { name: name.clone() });
    }

    Ok(())
}

fn check_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::InvalidTitle);
    }
    Ok(())
}

fn check_summary(summary: &str) -> Result<(), ValidationError> {
    if summary.is_empty() {
        return Err(ValidationError::SummaryRequired);
    }
    if summary.chars().count() > SUMMARY_MAX_CHARS {
        return Err(ValidationError::InvalidSummary);
    }
    Ok(())
}

fn check_body(body: &str) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::BodyRequired);
    }
    Ok(())
}

/// An empty link is treated as not set.
fn check_link(link: &str) -> Result<(), ValidationError> {
    if link.is_empty() {
        return Ok(());
    }

    match url::Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidLink),
    }
}

fn check_string_array(name: &'static str, value: &Value) -> Result<(), ValidationError> {
    let Value::Array(elements) = value else {
        return Err(ValidationError::NotAnArray { field: name });
    };

    match elements.iter().position(|element| !element.is_string()) {
        Some(index) => Err(ValidationError::InvalidArrayElement { field: name, index }),
        None => Ok(()),
    }
}

/// Looks up an optional field, treating `null` as absent.
fn optional<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

/// Looks up a required string field.
///
/// Absent, `null` and empty values are `missing`; any other non-string is
/// `invalid`.
fn required_str<'a>(
    object: &'a Map<String, Value>,
    name: &str,
    missing: ValidationError,
    invalid: ValidationError,
) -> Result<&'a str, ValidationError> {
    match optional(object, name) {
        None => Err(missing),
        Some(Value::String(text)) if text.is_empty() => Err(missing),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(invalid),
    }
}
