use crate::commands::{CmdMessage, CmdResult, ImportSummary};
use crate::error::{Result, TextoriumError};
use crate::merge::{merge_imported_snippets_with_limits, MergeStrategy, Reconcile};
use crate::store::SnippetStore;
use crate::validation::ImportLimits;
use serde_json::Value;
use tracing::debug;

/// Merges an import document into the stored collection.
///
/// `json_text` must be a JSON array of snippet records. Invalid records are
/// counted and skipped. Conflicts on existing ids use `strategy`, which
/// defaults to [`Reconcile`].
pub fn run<S: SnippetStore>(
    store: &mut S,
    json_text: &str,
    limits: &ImportLimits,
    strategy: Option<&dyn MergeStrategy>,
) -> Result<CmdResult> {
    let imported: Value =
        serde_json::from_str(json_text).map_err(|e| TextoriumError::InvalidJson(e.to_string()))?;
    if !imported.is_array() {
        return Err(TextoriumError::InvalidJson(
            "expected an array of snippets".to_string(),
        ));
    }

    let existing = store.load_snippets()?;
    let strategy = strategy.unwrap_or(&Reconcile);
    let report = merge_imported_snippets_with_limits(&existing, &imported, None, Some(strategy), limits);
    debug!(
        added = report.added,
        updated = report.updated,
        invalid = report.invalid,
        "merged import document"
    );

    if report.snippets != existing {
        store.save_snippets(&report.snippets)?;
    }

    let summary = ImportSummary {
        added: report.added,
        updated: report.updated,
        invalid: report.invalid,
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported: {} added, {} updated",
        summary.added, summary.updated
    )));
    if summary.invalid > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} invalid records",
            summary.invalid
        )));
    }
    result.import = Some(summary);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::Overlay;
    use crate::model::Tag;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::InMemoryStore;
    use crate::store::SnippetCollection;

    const DOCUMENT: &str = r#"[
        { "id": "id-1", "title": "Changed", "content": "new", "createdAt": 0,
          "updatedAt": 5, "tags": [{ "name": "extra", "category": "" }] },
        { "id": "id-new", "title": "Fresh", "content": "body", "createdAt": 7,
          "updatedAt": 7, "favorite": "yes" },
        { "id": "", "title": "Broken", "content": "", "createdAt": 1, "updatedAt": 1 }
    ]"#;

    #[test]
    fn merges_and_reports_counts() {
        let mut fixture =
            StoreFixture::new().with_snippet("id-1", "Original", vec![Tag::new("keep", "x")]);

        let result = run(&mut fixture.store, DOCUMENT, &ImportLimits::default(), None).unwrap();

        assert_eq!(
            result.import,
            Some(ImportSummary {
                added: 1,
                updated: 1,
                invalid: 1
            })
        );
        let snippets = fixture.store.load_snippets().unwrap();
        assert_eq!(snippets.len(), 2);

        let merged = &snippets[0];
        assert_eq!(merged.title, "Changed");
        assert_eq!(merged.created_at, 0);
        assert_eq!(
            merged.tags,
            vec![Tag::new("keep", "x"), Tag::new("extra", "general")]
        );

        let fresh = &snippets[1];
        assert_eq!(fresh.id, "id-new");
        assert!(!fresh.favorite);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn stored_record_without_created_at_takes_imported_one() {
        let stored = serde_json::json!([
            { "id": "x", "title": "Stored", "content": "c", "updatedAt": 10 }
        ]);
        let mut store = SnippetCollection::with_backend(MemBackend::with_document(stored));
        let doc = r#"[{ "id": "x", "title": "Imported", "content": "c",
                        "createdAt": 500, "updatedAt": 20 }]"#;

        run(&mut store, doc, &ImportLimits::default(), None).unwrap();

        let snippets = store.load_snippets().unwrap();
        assert_eq!(snippets[0].created_at, 500);
        assert_eq!(snippets[0].title, "Imported");
    }

    #[test]
    fn overlay_strategy_replaces_tags() {
        let mut fixture =
            StoreFixture::new().with_snippet("id-1", "Original", vec![Tag::new("keep", "x")]);
        run(
            &mut fixture.store,
            DOCUMENT,
            &ImportLimits::default(),
            Some(&Overlay),
        )
        .unwrap();

        let merged = &fixture.store.load_snippets().unwrap()[0];
        assert_eq!(merged.tags, vec![Tag::new("extra", "general")]);
    }

    #[test]
    fn reimporting_changes_nothing() {
        let mut store = InMemoryStore::new();
        let limits = ImportLimits::default();
        run(&mut store, DOCUMENT, &limits, None).unwrap();
        let exported = serde_json::to_string(&store.load_snippets().unwrap()).unwrap();

        let before = store.load_snippets().unwrap();
        let result = run(&mut store, &exported, &limits, Some(&Overlay)).unwrap();

        assert_eq!(result.import.unwrap().added, 0);
        assert_eq!(store.load_snippets().unwrap().len(), before.len());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "{ nope", &ImportLimits::default(), None),
            Err(TextoriumError::InvalidJson(_))
        ));
    }

    #[test]
    fn non_array_document_is_an_error() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, r#"{"id":"x"}"#, &ImportLimits::default(), None),
            Err(TextoriumError::InvalidJson(_))
        ));
    }

    #[test]
    fn limits_are_applied() {
        let mut store = InMemoryStore::new();
        let limits = ImportLimits {
            max_title_chars: Some(3),
            ..ImportLimits::unbounded()
        };
        let result = run(&mut store, DOCUMENT, &limits, None).unwrap();
        assert_eq!(result.import.unwrap().invalid, 3);
        assert!(store.load_snippets().unwrap().is_empty());
    }
}
