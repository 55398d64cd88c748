//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! textorium operation, whatever the UI.
//!
//! The facade dispatches to the command functions, threads configuration
//! through (import limits, default view) and returns structured
//! `Result<CmdResult>` values. Business logic stays in `commands/*.rs`; the
//! facade does no terminal I/O.
//!
//! ## Generic Over SnippetStore
//!
//! `TextoriumApi<S: SnippetStore>` works with any storage:
//! - Production: `TextoriumApi<FileStore>`
//! - Testing: `TextoriumApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check that each method reaches the right command with the right
//! arguments. Command behavior is tested in the command modules.

use std::path::Path;

use crate::commands::{self, config::ConfigAction, update::SnippetUpdate, CmdResult};
use crate::config::TextoriumConfig;
use crate::error::Result;
use crate::merge::MergeStrategy;
use crate::state::ViewState;
use crate::store::SnippetStore;

pub struct TextoriumApi<S: SnippetStore> {
    store: S,
    config: TextoriumConfig,
}

impl<S: SnippetStore> TextoriumApi<S> {
    pub fn new(store: S, config: TextoriumConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &TextoriumConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The configured sort and direction with no filters.
    pub fn default_view(&self) -> ViewState {
        ViewState {
            sort_by: self.config.sort_key(),
            descending: self.config.descending,
            ..ViewState::default()
        }
    }

    pub fn create_snippet<T: AsRef<str>>(
        &mut self,
        title: &str,
        content: &str,
        tags: &[T],
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title, content, tags)
    }

    pub fn list_snippets(&self, view: &ViewState) -> Result<CmdResult> {
        commands::list::run(&self.store, view)
    }

    pub fn view_snippets<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn update_snippet(&mut self, id: &str, update: SnippetUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn favorite_snippets<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::favorite::favorite(&mut self.store, ids)
    }

    pub fn unfavorite_snippets<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::favorite::unfavorite(&mut self.store, ids)
    }

    pub fn toggle_favorite<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::favorite::toggle(&mut self.store, ids)
    }

    pub fn delete_snippets<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn export_snippets(&self, target: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.store, target)
    }

    /// Imports with the configured limits. `strategy` defaults to field
    /// reconciliation.
    pub fn import_snippets(
        &mut self,
        json_text: &str,
        strategy: Option<&dyn MergeStrategy>,
    ) -> Result<CmdResult> {
        let limits = self.config.limits();
        commands::import::run(&mut self.store, json_text, &limits, strategy)
    }

    pub fn tags(&self) -> Result<CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn show_config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config, action)
    }
}
