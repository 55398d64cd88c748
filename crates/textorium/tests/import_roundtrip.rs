use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;
use textorium::init::initialize_with_config;
use textorium::store::fs::FileStore;
use textorium::store::SnippetStore;
use textorium::{
    merge_imported_snippets, merge_snippets, Reconcile, Snippet, Tag, TextoriumApi,
};

fn file_api(dir: &TempDir) -> TextoriumApi<FileStore> {
    initialize_with_config(Default::default(), Some(dir.path().to_path_buf()))
        .unwrap()
        .api
}

fn tag_keys(snippet: &Snippet) -> BTreeSet<String> {
    snippet
        .tags
        .iter()
        .filter_map(|t| t.key())
        .map(|k| k.to_string())
        .collect()
}

#[test]
fn export_file_reimports_into_empty_collection() {
    let source_dir = TempDir::new().unwrap();
    let mut source = file_api(&source_dir);
    source
        .create_snippet("Standup", "Yesterday / Today", &["team:work", "daily"])
        .unwrap();
    source
        .create_snippet("Signature", "Regards", &[] as &[&str])
        .unwrap();
    let id = source.store().load_snippets().unwrap()[1].id.clone();
    source.favorite_snippets(&[&id]).unwrap();

    let export_path = source_dir.path().join("snippets_export.json");
    source.export_snippets(Some(&export_path)).unwrap();

    let target_dir = TempDir::new().unwrap();
    let mut target = file_api(&target_dir);
    let text = fs::read_to_string(&export_path).unwrap();
    let result = target.import_snippets(&text, None).unwrap();

    let summary = result.import.unwrap();
    assert_eq!(summary.added, 2);
    assert_eq!(summary.invalid, 0);

    let original = source.store().load_snippets().unwrap();
    let imported = target.store().load_snippets().unwrap();
    assert_eq!(original.len(), imported.len());
    for (a, b) in original.iter().zip(&imported) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.title, b.title);
        assert_eq!(a.favorite, b.favorite);
        assert_eq!(a.created_at, b.created_at);
        assert_eq!(tag_keys(a), tag_keys(b));
    }
}

#[test]
fn merge_counts_added_updated_invalid() {
    let existing = vec![Snippet::from_value(&json!({
        "id": "id-1", "title": "Old", "content": "x", "createdAt": 1, "updatedAt": 10
    }))
    .unwrap()];
    let imported = json!([
        { "id": "id-1", "title": "New", "content": "y", "createdAt": 1, "updatedAt": 99 },
        { "id": "id-2", "title": "Two", "content": "z", "createdAt": 5, "updatedAt": 5 },
        { "id": "", "title": "Bad", "content": "z", "createdAt": 5, "updatedAt": 5 }
    ]);

    let report = merge_imported_snippets(&existing, &imported, Some(100), Some(&Reconcile));

    assert_eq!((report.added, report.updated, report.invalid), (1, 1, 1));
    assert_eq!(report.snippets[0].updated_at, 100);
    assert_eq!(report.snippets[0].title, "New");
}

#[test]
fn round_trip_through_raw_json_keeps_unknown_fields() {
    let raw = json!([
        { "id": "id-a", "title": "A", "content": "a", "createdAt": 1, "updatedAt": 2,
          "tags": [{ "name": " Work ", "category": "", "color": "red" }],
          "pinnedColor": "#fff" }
    ]);
    let first = merge_imported_snippets(&[], &raw, Some(50), None);
    let exported: Value = serde_json::to_value(&first.snippets).unwrap();
    let second = merge_imported_snippets(&[], &exported, Some(50), None);

    assert_eq!(first.snippets, second.snippets);
    let snippet = &second.snippets[0];
    assert_eq!(snippet.extra.get("pinnedColor"), Some(&json!("#fff")));
    assert_eq!(snippet.tags[0].name, "Work");
    assert_eq!(snippet.tags[0].category, "general");
    assert_eq!(snippet.tags[0].extra.get("color"), Some(&json!("red")));
}

#[test]
fn self_merge_keeps_tag_set_favorite_and_created_at() {
    let mut snippet = Snippet::new(
        "t",
        "c",
        vec![Tag::new("a", "x"), Tag::new("A", "X"), Tag::new("b", "")],
    );
    snippet.favorite = true;

    let merged = merge_snippets(Some(&snippet), Some(&snippet), Some(snippet.updated_at + 1));

    assert_eq!(tag_keys(&merged), tag_keys(&snippet));
    assert_eq!(merged.tags.len(), 2);
    assert_eq!(merged.favorite, snippet.favorite);
    assert_eq!(merged.created_at, snippet.created_at);
}
