//! # Storage Layer
//!
//! The whole snippet collection is one JSON document: an array of snippet
//! objects, read in full before every command and written back in full after
//! every mutation. The [`SnippetStore`] trait lets the command layer work with
//! any place that can hold that document.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw document I/O (filesystem or memory)
//! - [`SnippetCollection`]: typed snippets on top of a backend
//!
//! ## Loading Is Lenient
//!
//! The stored file is our own output, but it may have been edited by hand or
//! written by an older version. Loading never rejects it:
//!
//! - a missing or empty file is an empty collection
//! - a document that is not an array is an empty collection (logged)
//! - array elements that are not objects are skipped (logged)
//! - wrong-typed fields fall back to defaults, see [`Snippet::from_value`]
//!
//! Only unreadable files and invalid JSON are errors.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `snippets.json` in a data directory, atomic writes
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! └── snippets.json       # The collection
//! ```

use crate::error::Result;
use crate::model::Snippet;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn};

use backend::StorageBackend;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for snippet storage.
pub trait SnippetStore {
    /// Load the full collection, in stored order.
    fn load_snippets(&self) -> Result<Vec<Snippet>>;

    /// Replace the full collection.
    fn save_snippets(&mut self, snippets: &[Snippet]) -> Result<()>;

    /// Where the collection lives, for display.
    fn location(&self) -> PathBuf;
}

/// Typed snippet storage over a raw [`StorageBackend`].
pub struct SnippetCollection<B: StorageBackend> {
    pub(crate) backend: B,
}

impl<B: StorageBackend> SnippetCollection<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: StorageBackend> SnippetStore for SnippetCollection<B> {
    fn load_snippets(&self) -> Result<Vec<Snippet>> {
        let Some(document) = self.backend.load_document()? else {
            return Ok(Vec::new());
        };
        Ok(snippets_from_document(&document, &self.backend.location()))
    }

    fn save_snippets(&mut self, snippets: &[Snippet]) -> Result<()> {
        let document = serde_json::to_value(snippets)?;
        self.backend.save_document(&document)?;
        info!(
            count = snippets.len(),
            path = %self.backend.location().display(),
            "saved snippet collection"
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}

fn snippets_from_document(document: &Value, location: &std::path::Path) -> Vec<Snippet> {
    let Some(records) = document.as_array() else {
        warn!(
            path = %location.display(),
            "stored collection is not an array, treating it as empty"
        );
        return Vec::new();
    };

    let snippets = Snippet::collection_from_value(document);
    let skipped = records.len() - snippets.len();
    if skipped > 0 {
        warn!(
            skipped,
            path = %location.display(),
            "skipped stored records that are not objects"
        );
    }
    snippets
}
