use super::backend::StorageBackend;
use crate::error::{Result, TextoriumError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const COLLECTION_FILE: &str = "snippets.json";

/// Stores the collection as `snippets.json` inside a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_file(&self) -> PathBuf {
        self.root.join(COLLECTION_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TextoriumError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_document(&self) -> Result<Option<Value>> {
        let path = self.collection_file();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(TextoriumError::Io)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let document = serde_json::from_str(&content).map_err(TextoriumError::Serialization)?;
        Ok(Some(document))
    }

    fn save_document(&self, document: &Value) -> Result<()> {
        self.ensure_dir()?;

        let content =
            serde_json::to_string_pretty(document).map_err(TextoriumError::Serialization)?;

        let tmp_file = self.root.join(format!(".snippets-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(TextoriumError::Io)?;
        if let Err(err) = fs::rename(&tmp_file, self.collection_file()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TextoriumError::Io(err));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.collection_file()
    }
}
