use super::fs_backend::FsBackend;
use super::SnippetCollection;
use std::path::{Path, PathBuf};

/// The production store: `snippets.json` inside a data directory.
pub type FileStore = SnippetCollection<FsBackend>;

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        SnippetCollection::with_backend(FsBackend::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        self.backend.root()
    }
}
