//! Snippet ordering.
//!
//! | Key | Ascending order | Direction flag |
//! |-----|-----------------|----------------|
//! | `title` | case-insensitive title | honored |
//! | `createdAt` | oldest first | honored |
//! | `updatedAt` | least recently updated first | honored |
//! | `favorite` | favorites first, then newest `createdAt` first | **ignored** |
//! | anything else | newest `createdAt` first | honored |
//!
//! The fallback row is worth reading twice: the default comparator is already
//! "newest first", so asking for it descending yields oldest first.
//!
//! Sorting is stable and returns a new vector; the input is never touched.
//!
//! ## Title Collation
//!
//! Titles compare first on their lowercased, accent-stripped (NFD without
//! combining marks) form, so `Émile` sorts between `apple` and `Zed`. Accents
//! break ties after that, unaccented first. Case differences tie and keep
//! input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::Snippet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
    #[serde(rename = "favorite")]
    Favorite,
    /// Any unrecognized key: newest `createdAt` first.
    #[default]
    #[serde(rename = "newest")]
    #[serde(other)]
    Newest,
}

impl SortKey {
    /// Parses a wire key. Unknown keys fall back to [`SortKey::Newest`].
    pub fn parse(key: &str) -> Self {
        match key {
            "title" => SortKey::Title,
            "createdAt" => SortKey::CreatedAt,
            "updatedAt" => SortKey::UpdatedAt,
            "favorite" => SortKey::Favorite,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::CreatedAt => "createdAt",
            SortKey::UpdatedAt => "updatedAt",
            SortKey::Favorite => "favorite",
            SortKey::Newest => "newest",
        }
    }

    /// Whether the direction flag applies to this key.
    pub fn honors_direction(&self) -> bool {
        !matches!(self, SortKey::Favorite)
    }

    fn compare(&self, a: &Snippet, b: &Snippet) -> Ordering {
        match self {
            SortKey::Title => compare_titles(&a.title, &b.title),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::Favorite => b
                .favorite
                .cmp(&a.favorite)
                .then_with(|| b.created_at.cmp(&a.created_at)),
            SortKey::Newest => b.created_at.cmp(&a.created_at),
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive title order: base letters first, accents break ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    let (a_base, a_full) = collation_keys(a);
    let (b_base, b_full) = collation_keys(b);
    a_base.cmp(&b_base).then_with(|| a_full.cmp(&b_full))
}

/// The lowercased NFD form without combining marks, and with them.
fn collation_keys(title: &str) -> (String, String) {
    let full: String = title.to_lowercase().nfd().collect();
    let base = full.chars().filter(|c| !is_combining_mark(*c)).collect();
    (base, full)
}

/// Returns the snippets ordered by `sort_by`.
///
/// `descending` reverses every key except [`SortKey::Favorite`].
pub fn sort_snippets<'a, I>(snippets: I, sort_by: SortKey, descending: bool) -> Vec<&'a Snippet>
where
    I: IntoIterator<Item = &'a Snippet>,
{
    let mut sorted: Vec<&Snippet> = snippets.into_iter().collect();
    let reverse = descending && sort_by.honors_direction();

    sorted.sort_by(|a, b| {
        let ordering = sort_by.compare(a, b);
        if reverse {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}
