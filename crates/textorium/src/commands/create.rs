use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TextoriumError};
use crate::model::Snippet;
use crate::store::SnippetStore;
use crate::tags::{dedup_tags, parse_tag_input};

/// Adds a new snippet to the end of the collection.
///
/// Title and content are trimmed and both required. Each tag input is
/// `name` or `name:category`; blank inputs are ignored.
pub fn run<S: SnippetStore, T: AsRef<str>>(
    store: &mut S,
    title: &str,
    content: &str,
    tags: &[T],
) -> Result<CmdResult> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(TextoriumError::Api(
            "Title and content are required".to_string(),
        ));
    }

    let parsed: Vec<_> = tags
        .iter()
        .filter_map(|input| parse_tag_input(input.as_ref()))
        .collect();
    let snippet = Snippet::new(title, content, dedup_tags(&parsed));

    let mut snippets = store.load_snippets()?;
    snippets.push(snippet.clone());
    store.save_snippets(&snippets)?;

    let mut result = CmdResult::default().with_affected(vec![snippet.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Snippet created: {} ({})",
        snippet.title, snippet.id
    )));
    Ok(result)
}
