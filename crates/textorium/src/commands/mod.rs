//! # Command Layer
//!
//! Each host operation lives in its own submodule as a plain function over a
//! [`SnippetStore`](crate::store::SnippetStore). A command loads the
//! collection, calls into the engine modules, saves when something changed
//! and describes what happened in a [`CmdResult`].
//!
//! Commands do no terminal I/O and parse no arguments. They return data; the
//! CLI decides how to show it.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected`: snippets created or modified by the operation
//! - `listed`: snippets to display
//! - `messages`: leveled messages (info, success, warning, error)
//! - `tags`: the tag catalog (for `tags`)
//! - `export`: the serialized collection (for `export`)
//! - `import`: counters (for `import`)
//! - `config`: resolved configuration (for `config`)
//!
//! ## Testing
//!
//! Command tests run against `InMemoryStore` and check `CmdResult` contents
//! and the stored collection afterwards.
//!
//! ## Command Modules
//!
//! - [`create`]: add a snippet
//! - [`list`]: filtered and sorted view
//! - [`view`]: show snippets by id
//! - [`update`]: edit title, content or tags
//! - [`favorite`]: favorite, unfavorite, toggle
//! - [`delete`]: remove snippets
//! - [`export`]: serialize the collection
//! - [`import`]: merge an import file into the collection
//! - [`tags`]: tag catalog
//! - [`config`]: show configuration
//! - [`helpers`]: id resolution

use serde::Serialize;

use crate::config::TextoriumConfig;
use crate::model::Snippet;
use crate::tags::TagOption;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod favorite;
pub mod helpers;
pub mod import;
pub mod list;
pub mod tags;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }

    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

/// Counters reported by `import`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
    pub invalid: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Snippet>,
    pub listed: Vec<Snippet>,
    pub messages: Vec<CmdMessage>,
    pub tags: Vec<TagOption>,
    pub export: Option<String>,
    pub import: Option<ImportSummary>,
    pub config: Option<TextoriumConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected = snippets;
        self
    }

    pub fn with_listed(mut self, snippets: Vec<Snippet>) -> Self {
        self.listed = snippets;
        self
    }
}
