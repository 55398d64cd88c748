//! # Domain Model: Snippets, Tags and the Raw Boundary
//!
//! This module defines the two entities textorium stores: [`Snippet`] and [`Tag`].
//!
//! ## Wire Format
//!
//! Snippets travel as JSON objects with camelCase keys, which is both the
//! storage format and the import/export file format:
//!
//! ```text
//! {
//!   "id": "id-k3j9x0a1b",
//!   "title": "Standup",
//!   "content": "Yesterday / Today / Blockers",
//!   "tags": [{ "name": "team", "category": "work" }],
//!   "favorite": false,
//!   "createdAt": 1718000000000,
//!   "updatedAt": 1718000000000
//! }
//! ```
//!
//! Keys textorium does not know about are kept in `extra` and written back
//! untouched, on both snippets and tags. Timestamps are milliseconds since the
//! Unix epoch; fractional values are truncated toward zero when loaded.
//!
//! ## Typed vs Raw
//!
//! Anything read from disk or from an import file is a [`serde_json::Value`]
//! until it has been through either the import validator
//! ([`crate::validation`]) or the lenient loader ([`Snippet::from_value`]).
//! The engine functions in [`crate::filter`], [`crate::sort`] and
//! [`crate::merge`] only ever see typed snippets.
//!
//! The lenient loader never fails on an object. Wrong-typed fields fall back
//! to `""`, `0`, `false` or `[]`, and non-object tag entries are dropped. A
//! missing or unreadable `createdAt` becomes the current time.
//! Non-object records yield `None` and are dropped by every caller.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category assigned to tags whose category is missing or blank.
pub const DEFAULT_CATEGORY: &str = "general";

pub(crate) const SNIPPET_FIELDS: [&str; 7] = [
    "id",
    "title",
    "content",
    "tags",
    "favorite",
    "createdAt",
    "updatedAt",
];

const TAG_FIELDS: [&str; 2] = ["name", "category"];

const ID_PREFIX: &str = "id-";
const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tag {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            extra: Map::new(),
        }
    }

    /// Builds a tag from a stored JSON value.
    ///
    /// Returns `None` for non-objects. A non-string `name` or `category`
    /// becomes an empty string; such a tag is later skipped by
    /// normalization rather than rejected here.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            name: string_field(obj, "name"),
            category: string_field(obj, "category"),
            extra: extra_fields(obj, &TAG_FIELDS),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Snippet {
    /// Creates a fresh snippet with a generated id and matching timestamps.
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<Tag>) -> Self {
        let now = now_millis();
        Self {
            id: generate_id(),
            title: title.into(),
            content: content.into(),
            tags,
            favorite: false,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }

    /// The shape a merge degrades to when it has nothing to work with.
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            favorite: false,
            created_at: 0,
            updated_at: 0,
            extra: Map::new(),
        }
    }

    /// Lenient conversion from a stored record. See the module docs.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let tags = obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Tag::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            id: string_field(obj, "id"),
            title: string_field(obj, "title"),
            content: string_field(obj, "content"),
            tags,
            favorite: obj.get("favorite").is_some_and(is_truthy),
            // An unknown creation time counts as "now" so merges take the other side's.
            created_at: obj
                .get("createdAt")
                .and_then(millis)
                .unwrap_or_else(now_millis),
            updated_at: obj.get("updatedAt").and_then(millis).unwrap_or(0),
            extra: extra_fields(obj, &SNIPPET_FIELDS),
        })
    }

    /// Converts a stored collection, dropping anything that is not an object.
    ///
    /// A value that is not an array is an empty collection.
    pub fn collection_from_value(value: &Value) -> Vec<Self> {
        value
            .as_array()
            .map(|records| records.iter().filter_map(Self::from_value).collect())
            .unwrap_or_default()
    }

    /// Marks the snippet as modified now.
    ///
    /// `updated_at` never moves backwards and never drops below `created_at`.
    pub fn touch(&mut self) {
        self.updated_at = now_millis().max(self.updated_at).max(self.created_at);
    }
}

/// Returns a raw record's `tags` array, or an empty slice when it is missing
/// or not an array.
pub fn get_snippet_tags(record: &Value) -> &[Value] {
    record
        .get("tags")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generates an id of the form `id-xxxxxxxxx` over `[0-9a-z]`.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{ID_PREFIX}{suffix}")
}

/// Reads a JSON number as integer milliseconds.
pub(crate) fn millis(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
}

/// JavaScript truthiness for a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub(crate) fn extra_fields(obj: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    obj.iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
