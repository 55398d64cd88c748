//! Tag catalog: the distinct tags of a collection, for populating tag filters.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::Snippet;

/// One entry of the tag filter.
///
/// `value` is the selection string accepted by
/// [`crate::tags::parse_tag_selection`]; `label` is for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagOption {
    pub value: String,
    pub label: String,
}

/// Collects the distinct tags across `snippets`, sorted by `value`.
///
/// Tags are deduplicated case-insensitively; the first occurrence decides the
/// casing of both `value` and `label`. Tags with a blank name are skipped.
pub fn build_tag_filter_options<'a, I>(snippets: I) -> Vec<TagOption>
where
    I: IntoIterator<Item = &'a Snippet>,
{
    let mut seen = HashSet::new();
    let mut options: Vec<TagOption> = snippets
        .into_iter()
        .flat_map(|snippet| snippet.tags.iter())
        .filter_map(|tag| {
            let tag = tag.normalized()?;
            // Tags rendering to the same `name:category` are one option.
            let key = tag.key()?.to_string();
            seen.insert(key).then(|| TagOption {
                value: format!("{}:{}", tag.name, tag.category),
                label: tag.label(),
            })
        })
        .collect();

    options.sort_by(|a, b| a.value.cmp(&b.value));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    fn with_tags(tags: Vec<Tag>) -> Snippet {
        let mut snippet = Snippet::empty();
        snippet.tags = tags;
        snippet
    }

    #[test]
    fn deduplicates_and_sorts() {
        let snippets = vec![
            with_tags(vec![Tag::new("beta", "x"), Tag::new("alpha", "")]),
            with_tags(vec![Tag::new("beta", "x")]),
        ];

        let options = build_tag_filter_options(&snippets);

        assert_eq!(
            options,
            vec![
                TagOption {
                    value: "alpha:general".into(),
                    label: "alpha (general)".into(),
                },
                TagOption {
                    value: "beta:x".into(),
                    label: "beta (x)".into(),
                },
            ]
        );
    }

    #[test]
    fn first_occurrence_casing_wins() {
        let snippets = vec![
            with_tags(vec![Tag::new("Rust", "Lang")]),
            with_tags(vec![Tag::new("rust", "lang")]),
        ];

        let options = build_tag_filter_options(&snippets);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "Rust:Lang");
        assert_eq!(options[0].label, "Rust (Lang)");
    }

    #[test]
    fn skips_blank_names_without_affecting_others() {
        let snippets = vec![
            with_tags(vec![Tag::new("  ", "x"), Tag::new("kept", "y")]),
            with_tags(vec![Tag::new("", "")]),
        ];

        let options = build_tag_filter_options(&snippets);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "kept:y");
    }

    #[test]
    fn keys_that_render_alike_share_one_option() {
        let snippets = vec![
            with_tags(vec![Tag::new("a:b", "c")]),
            with_tags(vec![Tag::new("a", "b:c")]),
        ];
        let options = build_tag_filter_options(&snippets);
        assert_eq!(
            options,
            vec![TagOption {
                value: "a:b:c".into(),
                label: "a:b (c)".into(),
            }]
        );
    }

    #[test]
    fn empty_collection_has_no_options() {
        let snippets: Vec<Snippet> = Vec::new();
        assert!(build_tag_filter_options(&snippets).is_empty());
    }
}
