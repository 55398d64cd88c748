//! Snippet filtering.
//!
//! Three independent predicates, combined with AND:
//!
//! | Option | Matches when |
//! |--------|--------------|
//! | `favorites_only` | the snippet is a favorite |
//! | `selected_tag` | one of the snippet's tags has the selected [`TagKey`] |
//! | `search_term` | title, content, a tag name or a tag category contains the term |
//!
//! An empty `selected_tag` and a blank `search_term` disable their predicate.
//! Search is a case-insensitive substring match; tag categories are matched in
//! their normalized form, so `"general"` finds tags without a category.
//!
//! Filtering never reorders: the result keeps input order.

use serde::{Deserialize, Serialize};

use crate::model::Snippet;
use crate::tags::{normalize_category, parse_tag_selection, TagKey};

/// Filter settings as chosen by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub search_term: String,
    pub favorites_only: bool,
    /// `"name:category"`, or empty for no tag filter.
    pub selected_tag: String,
}

/// A compiled [`FilterOptions`]: the search term lowercased and the tag
/// selection parsed once, then applied to many snippets.
#[derive(Debug, Clone)]
pub struct SnippetFilter {
    search_term: Option<String>,
    favorites_only: bool,
    tag: Option<TagKey>,
}

impl SnippetFilter {
    pub fn new(options: &FilterOptions) -> Self {
        let term = options.search_term.trim().to_lowercase();
        Self {
            search_term: (!term.is_empty()).then_some(term),
            favorites_only: options.favorites_only,
            tag: parse_tag_selection(&options.selected_tag),
        }
    }

    /// Returns true when the snippet passes every active predicate.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        if self.favorites_only && !snippet.favorite {
            return false;
        }

        if let Some(wanted) = &self.tag {
            let has_tag = snippet
                .tags
                .iter()
                .any(|tag| tag.key().as_ref() == Some(wanted));
            if !has_tag {
                return false;
            }
        }

        match &self.search_term {
            Some(term) => contains_search_text(snippet, term),
            None => true,
        }
    }
}

/// `term` must already be trimmed and lowercased.
fn contains_search_text(snippet: &Snippet, term: &str) -> bool {
    if snippet.title.to_lowercase().contains(term) || snippet.content.to_lowercase().contains(term)
    {
        return true;
    }

    snippet.tags.iter().any(|tag| {
        let name = tag.name.trim();
        if name.is_empty() {
            return false;
        }
        name.to_lowercase().contains(term)
            || normalize_category(&tag.category)
                .to_lowercase()
                .contains(term)
    })
}

/// Returns the snippets matching `options`, in input order.
pub fn filter_snippets<'a, I>(snippets: I, options: &FilterOptions) -> Vec<&'a Snippet>
where
    I: IntoIterator<Item = &'a Snippet>,
{
    let filter = SnippetFilter::new(options);
    snippets
        .into_iter()
        .filter(|snippet| filter.matches(snippet))
        .collect()
}
