use crate::error::Result;
use serde_json::Value;
use std::path::PathBuf;

/// Raw persistence for the snippet collection.
///
/// Backends move JSON in and out of storage and know nothing about
/// snippets; [`super::SnippetCollection`] owns the lenient loading and the
/// logging around it.
pub trait StorageBackend {
    /// Load the stored collection document.
    /// Returns Ok(None) when nothing has been stored yet.
    fn load_document(&self) -> Result<Option<Value>>;

    /// Replace the stored collection document.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_document(&self, document: &Value) -> Result<()>;

    /// Where the collection lives. A virtual path for non-file backends.
    fn location(&self) -> PathBuf;
}
