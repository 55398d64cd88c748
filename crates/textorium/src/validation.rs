//! Import validation and normalization.
//!
//! Import files are arbitrary JSON. Every record is treated as an unknown blob
//! and must pass [`validate_imported_snippet`] before a typed [`Snippet`] is
//! built from it.
//!
//! Valid records:
//! - are JSON objects
//! - have a non-empty string `id`
//! - have string `title` and `content`
//! - have numeric `createdAt` and `updatedAt`
//! - have no `tags`, or an array of valid tags
//!
//! A valid tag is an object with a `name` string that is non-empty after
//! trimming, and a `category` that is absent or a string.
//!
//! ## Length Bounds
//!
//! On top of the structural rules, [`ImportLimits`] caps text lengths. The
//! defaults are 200 characters for titles, 10,000 for content and 50 for tag
//! names and categories. Lengths count Unicode scalar values. A limit of
//! `None` disables that bound.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{extra_fields, millis, Snippet, Tag, SNIPPET_FIELDS};

pub const DEFAULT_MAX_TITLE_CHARS: usize = 200;
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 10_000;
pub const DEFAULT_MAX_TAG_CHARS: usize = 50;

/// Why an imported record was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("record is not an object")]
    NotAnObject,
    #[error("id must be a non-empty string")]
    InvalidId,
    #[error("field `{0}` must be a string")]
    NotAString(&'static str),
    #[error("field `{0}` must be a number")]
    NotANumber(&'static str),
    #[error("tags must be an array")]
    TagsNotAnArray,
    #[error("tag at position {0} is invalid")]
    InvalidTag(usize),
    #[error("field `{field}` exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Length bounds applied to imported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLimits {
    pub max_title_chars: Option<usize>,
    pub max_content_chars: Option<usize>,
    pub max_tag_chars: Option<usize>,
}

impl Default for ImportLimits {
    fn default() -> Self {
        Self {
            max_title_chars: Some(DEFAULT_MAX_TITLE_CHARS),
            max_content_chars: Some(DEFAULT_MAX_CONTENT_CHARS),
            max_tag_chars: Some(DEFAULT_MAX_TAG_CHARS),
        }
    }
}

impl ImportLimits {
    /// Structural checks only.
    pub fn unbounded() -> Self {
        Self {
            max_title_chars: None,
            max_content_chars: None,
            max_tag_chars: None,
        }
    }

    /// Builds limits from configured values, where `0` disables a bound.
    pub fn from_config(title: usize, content: usize, tag: usize) -> Self {
        let bound = |n: usize| (n > 0).then_some(n);
        Self {
            max_title_chars: bound(title),
            max_content_chars: bound(content),
            max_tag_chars: bound(tag),
        }
    }
}

/// Returns true when `tag` is an acceptable imported tag.
pub fn is_valid_imported_tag(tag: &Value) -> bool {
    validate_tag(tag, None)
}

fn validate_tag(tag: &Value, max_chars: Option<usize>) -> bool {
    let Some(obj) = tag.as_object() else {
        return false;
    };
    let Some(name) = obj.get("name").and_then(Value::as_str) else {
        return false;
    };
    if name.trim().is_empty() {
        return false;
    }
    let category = match obj.get("category") {
        None => None,
        Some(Value::String(category)) => Some(category.as_str()),
        Some(_) => return false,
    };
    match max_chars {
        Some(max) => {
            within(name.trim(), max) && category.map_or(true, |c| within(c.trim(), max))
        }
        None => true,
    }
}

/// Returns true when `record` passes every rule with the default limits.
pub fn is_valid_imported_snippet(record: &Value) -> bool {
    validate_imported_snippet(record, &ImportLimits::default()).is_ok()
}

/// Checks `record` against the import rules, reporting the first failure.
pub fn validate_imported_snippet(
    record: &Value,
    limits: &ImportLimits,
) -> Result<(), ValidationError> {
    let obj = record.as_object().ok_or(ValidationError::NotAnObject)?;

    match obj.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => {}
        _ => return Err(ValidationError::InvalidId),
    }
    let title = require_str(obj, "title")?;
    let content = require_str(obj, "content")?;
    require_number(obj, "createdAt")?;
    require_number(obj, "updatedAt")?;

    if let Some(tags) = obj.get("tags") {
        let tags = tags.as_array().ok_or(ValidationError::TagsNotAnArray)?;
        if let Some(pos) = tags
            .iter()
            .position(|tag| !validate_tag(tag, limits.max_tag_chars))
        {
            return Err(ValidationError::InvalidTag(pos));
        }
    }

    check_len("title", title, limits.max_title_chars)?;
    check_len("content", content, limits.max_content_chars)?;
    Ok(())
}

/// Keeps the valid tags of a raw `tags` value and normalizes them.
///
/// Names and categories are trimmed, blank categories become `"general"`.
/// A value that is not an array yields no tags.
pub fn normalize_snippet_tags(tags: Option<&Value>) -> Vec<Tag> {
    tags.and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter(|tag| is_valid_imported_tag(tag))
                .filter_map(Tag::from_value)
                .filter_map(|tag| tag.normalized())
                .collect()
        })
        .unwrap_or_default()
}

/// Builds a typed snippet from a record that passes validation.
///
/// Unknown fields are preserved, tags are normalized, a non-boolean
/// `favorite` becomes `false`, and `updatedAt` is replaced by `updated_at`.
/// Length limits are not re-checked here; callers validate with their own
/// [`ImportLimits`] first.
pub fn normalize_imported_snippet(
    record: &Value,
    updated_at: i64,
) -> Result<Snippet, ValidationError> {
    validate_imported_snippet(record, &ImportLimits::unbounded())?;
    let obj = record.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(Snippet {
        id: require_str(obj, "id")?.to_string(),
        title: require_str(obj, "title")?.to_string(),
        content: require_str(obj, "content")?.to_string(),
        tags: normalize_snippet_tags(obj.get("tags")),
        favorite: obj.get("favorite").and_then(Value::as_bool).unwrap_or(false),
        created_at: require_number(obj, "createdAt")?,
        updated_at,
        extra: extra_fields(obj, &SNIPPET_FIELDS),
    })
}

fn require_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or(ValidationError::NotAString(field))
}

fn require_number(obj: &Map<String, Value>, field: &'static str) -> Result<i64, ValidationError> {
    obj.get(field)
        .filter(|value| value.is_number())
        .and_then(millis)
        .ok_or(ValidationError::NotANumber(field))
}

fn check_len(field: &'static str, text: &str, max: Option<usize>) -> Result<(), ValidationError> {
    match max {
        Some(max) if !within(text, max) => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

fn within(text: &str, max: usize) -> bool {
    text.chars().count() <= max
}
