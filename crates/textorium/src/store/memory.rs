use super::mem_backend::MemBackend;
use super::SnippetCollection;

pub type InMemoryStore = SnippetCollection<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        SnippetCollection::with_backend(MemBackend::new())
    }

    /// Makes every following save fail with a store error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.backend.set_simulate_write_error(simulate);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Snippet, Tag};
    use crate::store::SnippetStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        snippets: Vec<Snippet>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                snippets: Vec::new(),
            }
        }

        /// Adds `count` plain snippets with ids `id-1..=id-count`, created one
        /// millisecond apart.
        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 1..=count {
                let snippet = fixture_snippet(
                    &format!("id-{i}"),
                    &format!("Snippet {i}"),
                    i as i64,
                );
                self.snippets.push(snippet);
            }
            self.flush()
        }

        pub fn with_snippet(mut self, id: &str, title: &str, tags: Vec<Tag>) -> Self {
            let created_at = self.snippets.len() as i64 + 1;
            let mut snippet = fixture_snippet(id, title, created_at);
            snippet.tags = tags;
            self.snippets.push(snippet);
            self.flush()
        }

        pub fn with_favorite(mut self, id: &str, title: &str) -> Self {
            let created_at = self.snippets.len() as i64 + 1;
            let mut snippet = fixture_snippet(id, title, created_at);
            snippet.favorite = true;
            self.snippets.push(snippet);
            self.flush()
        }

        fn flush(mut self) -> Self {
            self.store.save_snippets(&self.snippets).unwrap();
            self
        }
    }

    fn fixture_snippet(id: &str, title: &str, created_at: i64) -> Snippet {
        let mut snippet = Snippet::new(title, format!("Content of {title}"), Vec::new());
        snippet.id = id.to_string();
        snippet.created_at = created_at;
        snippet.updated_at = created_at;
        snippet
    }
}
