use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;
use crate::tags::build_tag_filter_options;

/// The distinct tags of the collection, sorted by `name:category`.
pub fn run<S: SnippetStore>(store: &S) -> Result<CmdResult> {
    let snippets = store.load_snippets()?;
    let mut result = CmdResult::default();
    result.tags = build_tag_filter_options(&snippets);
    if result.tags.is_empty() {
        result.add_message(CmdMessage::info("No tags yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_distinct_tags() {
        let fixture = StoreFixture::new()
            .with_snippet("a", "A", vec![Tag::new("Work", ""), Tag::new("rust", "lang")])
            .with_snippet("b", "B", vec![Tag::new("work", "GENERAL")]);

        let result = run(&fixture.store).unwrap();

        let values: Vec<_> = result.tags.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["Work:general", "rust:lang"]);
        assert_eq!(result.tags[0].label, "Work (general)");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_is_explained() {
        let fixture = StoreFixture::new().with_snippets(1);
        let result = run(&fixture.store).unwrap();
        assert!(result.tags.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
