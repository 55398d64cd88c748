use super::backend::StorageBackend;
use crate::error::{Result, TextoriumError};
use serde_json::Value;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` so the `StorageBackend` trait can take `&self` everywhere;
/// textorium is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<Value>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already-stored document, e.g. a hand-written fixture.
    pub fn with_document(document: Value) -> Self {
        Self {
            document: RefCell::new(Some(document)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_document(&self) -> Result<Option<Value>> {
        Ok(self.document.borrow().clone())
    }

    fn save_document(&self, document: &Value) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TextoriumError::Store("Simulated write error".to_string()));
        }
        *self.document.borrow_mut() = Some(document.clone());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://snippets.json")
    }
}
