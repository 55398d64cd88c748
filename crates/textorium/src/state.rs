//! The host's view of the collection: what is searched, which filters are on
//! and how the result is ordered.
//!
//! The engine keeps no state of its own. A host owns a [`ViewState`], changes
//! it in response to user input and calls [`ViewState::apply`] to get the
//! visible snippets.

use serde::{Deserialize, Serialize};

use crate::filter::{filter_snippets, FilterOptions};
use crate::model::Snippet;
use crate::sort::{sort_snippets, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub search_term: String,
    pub favorites_only: bool,
    /// `"name:category"`, or empty for all tags.
    pub selected_tag: String,
    pub sort_by: SortKey,
    pub descending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            favorites_only: false,
            selected_tag: String::new(),
            sort_by: SortKey::CreatedAt,
            descending: true,
        }
    }
}

impl ViewState {
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            search_term: self.search_term.clone(),
            favorites_only: self.favorites_only,
            selected_tag: self.selected_tag.clone(),
        }
    }

    /// Filters, then sorts.
    pub fn apply<'a>(&self, snippets: &'a [Snippet]) -> Vec<&'a Snippet> {
        let filtered = filter_snippets(snippets, &self.filter_options());
        sort_snippets(filtered, self.sort_by, self.descending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    fn snippet(id: &str, created_at: i64, favorite: bool, tag: Option<Tag>) -> Snippet {
        let mut s = Snippet::empty();
        s.id = id.into();
        s.title = format!("title {id}");
        s.created_at = created_at;
        s.updated_at = created_at;
        s.favorite = favorite;
        s.tags = tag.into_iter().collect();
        s
    }

    fn ids(snippets: &[&Snippet]) -> Vec<String> {
        snippets.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn default_shows_newest_created_first() {
        let snippets = vec![
            snippet("a", 1, false, None),
            snippet("b", 3, false, None),
            snippet("c", 2, false, None),
        ];
        assert_eq!(ids(&ViewState::default().apply(&snippets)), vec!["b", "c", "a"]);
    }

    #[test]
    fn filters_before_sorting() {
        let snippets = vec![
            snippet("a", 1, true, Some(Tag::new("x", "work"))),
            snippet("b", 3, true, None),
            snippet("c", 2, true, Some(Tag::new("X", "Work"))),
            snippet("d", 4, false, Some(Tag::new("x", "work"))),
        ];
        let state = ViewState {
            favorites_only: true,
            selected_tag: "x:work".into(),
            sort_by: SortKey::CreatedAt,
            descending: false,
            ..Default::default()
        };
        assert_eq!(ids(&state.apply(&snippets)), vec!["a", "c"]);
    }

    #[test]
    fn deserializes_partial_state() {
        let state: ViewState =
            serde_json::from_str(r#"{ "searchTerm": "abc", "sortBy": "title" }"#).unwrap();
        assert_eq!(state.search_term, "abc");
        assert_eq!(state.sort_by, SortKey::Title);
        assert!(state.descending);
    }
}
