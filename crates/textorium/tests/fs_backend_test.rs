use serde_json::json;
use std::fs;
use tempfile::TempDir;
use textorium::store::backend::StorageBackend;
use textorium::store::fs_backend::{FsBackend, COLLECTION_FILE};

fn setup() -> (TempDir, FsBackend) {
    let data_dir = TempDir::new().unwrap();
    let backend = FsBackend::new(data_dir.path());
    (data_dir, backend)
}

#[test]
fn test_fs_backend_missing_document() {
    let (_dir, backend) = setup();
    assert_eq!(backend.load_document().unwrap(), None);
}

#[test]
fn test_fs_backend_document_io() {
    let (_dir, backend) = setup();
    let document = json!([{ "id": "id-1", "title": "Hello", "custom": [1, 2] }]);

    backend.save_document(&document).unwrap();

    assert_eq!(backend.load_document().unwrap(), Some(document));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.save_document(&json!(["first"])).unwrap();
    backend.save_document(&json!(["second"])).unwrap();

    let expected_path = dir.path().join(COLLECTION_FILE);
    assert!(expected_path.exists());
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&expected_path).unwrap()).unwrap();
    assert_eq!(on_disk, json!(["second"]));

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_failed_rename_removes_tmp_file() {
    let (dir, backend) = setup();
    // A non-empty directory where the collection file belongs makes the rename fail.
    let blocker = dir.path().join(COLLECTION_FILE);
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    assert!(backend.save_document(&json!(["doc"])).is_err());

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a").join("b");
    let backend = FsBackend::new(&root);

    backend.save_document(&json!([])).unwrap();

    assert!(root.join(COLLECTION_FILE).exists());
    assert_eq!(backend.location(), root.join(COLLECTION_FILE));
}

#[test]
fn test_fs_backend_document_is_pretty_printed() {
    let (dir, backend) = setup();
    backend.save_document(&json!([{ "id": "x" }])).unwrap();

    let raw = fs::read_to_string(dir.path().join(COLLECTION_FILE)).unwrap();
    assert!(raw.contains("\n  {"));
}
