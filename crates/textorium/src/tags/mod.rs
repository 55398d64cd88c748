//! Tag normalization and identity.
//!
//! A tag is a `(name, category)` pair. Stored tags are not trusted: names may
//! carry stray whitespace, categories may be blank or missing, and the same
//! tag may appear with different casing. Every place that compares tags goes
//! through [`Tag::normalized`] and [`TagKey`].
//!
//! ## Normalization Rules
//!
//! - `name` is trimmed and must be non-empty, otherwise the tag is skipped
//! - `category` is trimmed; blank becomes `"general"`
//! - unknown tag fields are preserved
//!
//! ## Identity
//!
//! Two tags are the same tag when their normalized name and category match
//! case-insensitively. [`TagKey`] holds the lowercased pair and renders as
//! `name:category`.
//!
//! ## Selection Strings
//!
//! The filter UI encodes a selected tag as `"name:category"`. The *last* colon
//! separates the two, so names containing colons still round-trip. See
//! [`parse_tag_selection`].

pub mod catalog;

use std::fmt;

use crate::model::{Tag, DEFAULT_CATEGORY};

pub use catalog::{build_tag_filter_options, TagOption};

/// Case-insensitive identity of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagKey {
    name: String,
    category: String,
}

impl TagKey {
    /// Builds a key from already-trimmed parts.
    fn from_parts(name: &str, category: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            category: category.to_lowercase(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.category)
    }
}

impl Tag {
    /// Returns the normalized form of this tag, or `None` when the name is
    /// blank.
    pub fn normalized(&self) -> Option<Tag> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Tag {
            name: name.to_string(),
            category: normalize_category(&self.category).to_string(),
            extra: self.extra.clone(),
        })
    }

    /// The identity key of this tag, or `None` when the name is blank.
    pub fn key(&self) -> Option<TagKey> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(TagKey::from_parts(name, normalize_category(&self.category)))
    }

    /// Display label, e.g. `"meeting (work)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name.trim(), normalize_category(&self.category))
    }
}

/// Trims a category and substitutes the default for blank values.
pub fn normalize_category(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY
    } else {
        trimmed
    }
}

/// Normalizes a tag list: drops blank names, trims, defaults categories.
///
/// Duplicates are kept; see [`dedup_tags`].
pub fn normalize_tags<'a, I>(tags: I) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a Tag>,
{
    tags.into_iter().filter_map(Tag::normalized).collect()
}

/// Normalizes and deduplicates tags by [`TagKey`], keeping the first
/// occurrence in iteration order.
pub fn dedup_tags<'a, I>(tags: I) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a Tag>,
{
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .filter_map(Tag::normalized)
        .filter(|tag| {
            tag.key()
                .map(|key| seen.insert(key))
                .unwrap_or(false)
        })
        .collect()
}

/// Parses a `"name:category"` selection string into a tag key.
///
/// Splits on the last colon. A string without a colon is a bare name in the
/// default category. Empty or blank-name selections yield `None`, meaning
/// "no tag filter".
pub fn parse_tag_selection(selection: &str) -> Option<TagKey> {
    if selection.is_empty() {
        return None;
    }
    let (name, category) = match selection.rfind(':') {
        Some(idx) => (&selection[..idx], &selection[idx + 1..]),
        None => (selection, ""),
    };
    Tag::new(name, category).key()
}

/// Parses user tag input of the form `name` or `name:category`.
///
/// Used by the create and edit commands. Returns `None` for blank input.
pub fn parse_tag_input(input: &str) -> Option<Tag> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let (name, category) = match input.rfind(':') {
        Some(idx) => (&input[..idx], &input[idx + 1..]),
        None => (input, ""),
    };
    Tag::new(name, category).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalized_trims_and_defaults_category() {
        let tag = Tag::new("  work ", "   ").normalized().unwrap();
        assert_eq!(tag.name, "work");
        assert_eq!(tag.category, "general");

        let tag = Tag::new("a", " Team ").normalized().unwrap();
        assert_eq!(tag.category, "Team");
    }

    #[test]
    fn normalized_rejects_blank_name() {
        assert!(Tag::new("", "x").normalized().is_none());
        assert!(Tag::new("   ", "x").normalized().is_none());
    }

    #[test]
    fn normalized_preserves_extra_fields() {
        let mut tag = Tag::new("a", "");
        tag.extra.insert("color".into(), json!("red"));
        assert_eq!(
            tag.normalized().unwrap().extra.get("color"),
            Some(&json!("red"))
        );
    }

    #[test]
    fn key_is_case_insensitive() {
        let a = Tag::new("Work", "GENERAL").key().unwrap();
        let b = Tag::new(" work", "").key().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "work:general");
    }

    #[test]
    fn key_keeps_colon_names_distinct() {
        let a = Tag::new("a:b", "c").key().unwrap();
        let b = Tag::new("a", "b:c").key().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let tags = vec![
            Tag::new("Work", "general"),
            Tag::new("Meeting", "work"),
            Tag::new("work", "GENERAL"),
            Tag::new("", "ignored"),
            Tag::new("Urgent", "personal"),
        ];
        let deduped = dedup_tags(&tags);
        let names: Vec<_> = deduped.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Work", "Meeting", "Urgent"]);
    }

    #[test]
    fn parse_selection_splits_on_last_colon() {
        let key = parse_tag_selection("team:work").unwrap();
        assert_eq!(key.name(), "team");
        assert_eq!(key.category(), "work");

        let key = parse_tag_selection("http://x:links").unwrap();
        assert_eq!(key.name(), "http://x");
        assert_eq!(key.category(), "links");
    }

    #[test]
    fn parse_selection_defaults_and_empty() {
        assert!(parse_tag_selection("").is_none());
        assert!(parse_tag_selection(":work").is_none());

        let key = parse_tag_selection("Team").unwrap();
        assert_eq!(key.to_string(), "team:general");

        let key = parse_tag_selection("Team:").unwrap();
        assert_eq!(key.to_string(), "team:general");
    }

    #[test]
    fn parse_tag_input_handles_optional_category() {
        assert_eq!(parse_tag_input("meeting"), Some(Tag::new("meeting", "general")));
        assert_eq!(
            parse_tag_input(" meeting : work "),
            Some(Tag::new("meeting", "work"))
        );
        assert_eq!(parse_tag_input("  "), None);
    }

    #[test]
    fn label_uses_normalized_parts() {
        assert_eq!(Tag::new(" alpha ", "").label(), "alpha (general)");
    }
}
