use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TextoriumError};
use crate::store::SnippetStore;
use crate::tags::{dedup_tags, parse_tag_input};

use super::helpers::resolve_position;

/// Fields to change on an existing snippet. `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct SnippetUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Replaces all tags. Each entry is `name[:category]`; an empty list, or
    /// only blank entries, clears the tags.
    pub tags: Option<Vec<String>>,
}

impl SnippetUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}

pub fn run<S: SnippetStore>(store: &mut S, id: &str, update: SnippetUpdate) -> Result<CmdResult> {
    if update.is_empty() {
        return Err(TextoriumError::Api("Nothing to update".to_string()));
    }

    let mut snippets = store.load_snippets()?;
    let pos = resolve_position(&snippets, id)?;
    let snippet = &mut snippets[pos];

    if let Some(title) = update.title {
        snippet.title = required(&title, "Title")?;
    }
    if let Some(content) = update.content {
        snippet.content = required(&content, "Content")?;
    }
    if let Some(inputs) = update.tags {
        let parsed: Vec<_> = inputs.iter().filter_map(|t| parse_tag_input(t)).collect();
        snippet.tags = dedup_tags(&parsed);
    }
    snippet.touch();

    let updated = snippet.clone();
    store.save_snippets(&snippets)?;

    let mut result = CmdResult::default().with_affected(vec![updated.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Snippet updated: {} ({})",
        updated.title, updated.id
    )));
    Ok(result)
}

fn required(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TextoriumError::Api(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}
